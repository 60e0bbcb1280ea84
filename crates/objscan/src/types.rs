use image::GrayImage;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pixel coordinate in the input image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Axis-aligned bounding rectangle of a contour, in pixels.
///
/// `width` and `height` count pixels inclusively, so a single pixel has size 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Exclusive right edge (`x + width`)
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (`y + height`)
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Corners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

/// One retained, measured and ranked object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetectedObject {
    /// 1-based rank in ascending `center.x` order
    pub number: usize,
    pub position: Point,
    pub size: Size,
    pub center: Point,
    pub corners: Corners,
}

impl DetectedObject {
    pub fn bounding_rect(&self) -> BoundingRect {
        BoundingRect::new(self.position.x, self.position.y, self.size.width, self.size.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Gaps between the image edges and the union extent of all objects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Distances {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Aggregate detection record for one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResult {
    pub image_size: ImageSize,
    pub distances: Distances,
    pub objects: Vec<DetectedObject>,
}

/// Binary foreground mask: 255 marks object pixels, 0 marks background.
#[derive(Debug, Clone)]
pub struct Mask {
    image: GrayImage,
}

impl Mask {
    /// Wrap a 0/255 image; any non-zero pixel reads as foreground
    pub fn from_binary(image: GrayImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.image.get_pixel(x, y).0[0] != 0
    }

    /// Count of foreground pixels
    pub fn foreground_pixels(&self) -> usize {
        self.image.pixels().filter(|p| p.0[0] != 0).count()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }
}

/// Boundary points of one connected foreground region, in tracing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContour {
    pub points: Vec<(i32, i32)>,
}
