use tracing::debug;
use crate::{
    error::Result,
    traits::{ContourExtractor, VisionPrimitives},
    types::{BoundingRect, Mask},
};

/// Rectangles with an area at or below this many px² are treated as noise
pub const MIN_OBJECT_AREA: u64 = 100;

/// External-contour extractor with a fixed noise-area filter
#[derive(Debug, Clone, Default)]
pub struct ExternalContourExtractor<V> {
    pub primitives: V,
}

impl<V: VisionPrimitives> ExternalContourExtractor<V> {
    pub fn new(primitives: V) -> Self {
        Self { primitives }
    }
}

impl<V: VisionPrimitives> ContourExtractor for ExternalContourExtractor<V> {
    fn extract_rects(&self, mask: &Mask) -> Result<Vec<BoundingRect>> {
        let contours = self.primitives.trace_external_contours(mask)?;
        let traced = contours.len();

        let mut rects = Vec::with_capacity(traced);
        for contour in &contours {
            let rect = self.primitives.bounding_rect(contour)?;
            if rect.area() > MIN_OBJECT_AREA {
                rects.push(rect);
            }
        }

        debug!(traced, retained = rects.len(), "filtered external contours");
        Ok(rects)
    }
}
