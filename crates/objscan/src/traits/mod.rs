use image::{DynamicImage, GrayImage, Rgba};
use crate::{
    error::Result,
    types::{BoundingRect, Mask, Point, RawContour},
};

/// How a single-channel plane is binarized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Pixels strictly above the value become foreground
    Fixed(u8),
    /// Otsu's method picks the value from the plane's histogram
    AutoBimodal,
}

/// Capability contract over an image-processing library
pub trait VisionPrimitives: Send + Sync {
    /// Split a pixel buffer into one plane per channel (R, G, B and A when present)
    fn split_channels(&self, image: &DynamicImage) -> Result<Vec<GrayImage>>;

    /// Single-channel luminance of the pixel buffer
    fn to_grayscale(&self, image: &DynamicImage) -> Result<GrayImage>;

    /// Binarize a plane into a 0/255 mask
    fn threshold(&self, plane: &GrayImage, mode: ThresholdMode) -> Result<Mask>;

    /// Trace outermost contours only, in discovery order
    fn trace_external_contours(&self, mask: &Mask) -> Result<Vec<RawContour>>;

    /// Smallest axis-aligned rectangle enclosing the contour
    fn bounding_rect(&self, contour: &RawContour) -> Result<BoundingRect>;
}

/// Trait for foreground mask construction
pub trait MaskBuilder: Send + Sync {
    fn build_mask(&self, image: &DynamicImage) -> Result<Mask>;
}

/// Trait for turning a mask into retained object rectangles
pub trait ContourExtractor: Send + Sync {
    /// Rectangles of the retained contours, in discovery order
    fn extract_rects(&self, mask: &Mask) -> Result<Vec<BoundingRect>>;
}

/// Drawing surface the overlay renderer writes to
pub trait OverlaySink {
    fn dimensions(&self) -> (u32, u32);

    /// Outline of `rect`, `thickness` pixels wide, drawn inwards
    fn draw_rect(&mut self, rect: BoundingRect, thickness: u32, color: Rgba<u8>);

    fn draw_circle(&mut self, center: Point, radius: u32, color: Rgba<u8>);

    /// Text whose baseline starts at (`x`, `baseline`)
    fn draw_text(&mut self, x: i32, baseline: i32, size: f32, text: &str, color: Rgba<u8>);
}
