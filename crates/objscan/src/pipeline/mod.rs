pub mod builder;

use image::DynamicImage;
use tracing::{info, instrument};
use crate::{
    algorithms::{edge_distances, measure, rank_by_center_x},
    error::Result,
    traits::{ContourExtractor, MaskBuilder},
    types::{DetectedObject, DetectionResult, ImageSize},
};

/// Single-shot detection pipeline: mask, contours, measurement, ordering, assembly
pub struct Pipeline {
    mask_builder: Box<dyn MaskBuilder>,
    contour_extractor: Box<dyn ContourExtractor>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(mask_builder: Box<dyn MaskBuilder>, contour_extractor: Box<dyn ContourExtractor>) -> Self {
        Self {
            mask_builder,
            contour_extractor,
        }
    }

    /// Run detection on a decoded pixel buffer
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn process(&self, image: &DynamicImage) -> Result<DetectionResult> {
        let image_size = ImageSize {
            width: image.width(),
            height: image.height(),
        };

        // The mask is only needed until the rectangles are known
        let rects = {
            let mask = self.mask_builder.build_mask(image)?;
            self.contour_extractor.extract_rects(&mask)?
        };

        let objects = rank_by_center_x(rects.into_iter().map(measure).collect());
        let result = assemble(image_size, objects);

        info!(objects = result.objects.len(), "detection finished");
        Ok(result)
    }
}

/// Package ranked objects and their edge distances into the final record
pub fn assemble(image_size: ImageSize, objects: Vec<DetectedObject>) -> DetectionResult {
    let distances = edge_distances(&objects, image_size);
    DetectionResult {
        image_size,
        distances,
        objects,
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::builder().build()
    }
}
