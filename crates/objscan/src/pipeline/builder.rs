use crate::{
    pipeline::Pipeline,
    traits::{ContourExtractor, MaskBuilder},
    algorithms::{ChannelMaskBuilder, ExternalContourExtractor, ImageprocPrimitives, MaskStrategy},
};

/// Builder for creating detection pipelines with a fluent API
pub struct PipelineBuilder {
    mask_builder: Option<Box<dyn MaskBuilder>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            mask_builder: None,
            contour_extractor: None,
        }
    }

    /// Set the mask builder (replaces any existing one)
    pub fn set_mask_builder<M>(mut self, builder: M) -> Self
    where
        M: MaskBuilder + 'static,
    {
        self.mask_builder = Some(Box::new(builder));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Use the imageproc-backed mask builder with the given strategy
    pub fn with_mask_strategy(self, strategy: MaskStrategy) -> Self {
        self.set_mask_builder(ChannelMaskBuilder::new(ImageprocPrimitives, strategy))
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> Pipeline {
        let mask_builder = self.mask_builder
            .unwrap_or_else(|| Box::new(ChannelMaskBuilder::new(ImageprocPrimitives, MaskStrategy::Auto)));

        let contour_extractor = self.contour_extractor
            .unwrap_or_else(|| Box::new(ExternalContourExtractor::new(ImageprocPrimitives)));

        Pipeline::new(mask_builder, contour_extractor)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
