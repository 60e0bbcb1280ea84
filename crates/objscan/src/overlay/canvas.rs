use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_text_mut},
    rect::Rect,
};
use crate::{
    error::{DetectError, Result},
    traits::OverlaySink,
    types::{BoundingRect, Point},
};

static DEFAULT_FONT: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

/// Embedded DejaVu Sans
pub fn default_font() -> Result<FontArc> {
    FontArc::try_from_slice(DEFAULT_FONT).map_err(|e| DetectError::Font(e.to_string()))
}

/// Load a TrueType/OpenType font from disk
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<FontArc> {
    let bytes = std::fs::read(path)?;
    FontArc::try_from_vec(bytes).map_err(|e| DetectError::Font(e.to_string()))
}

/// RGBA drawing surface backed by `imageproc::drawing`
pub struct ImageCanvas {
    image: RgbaImage,
    font: FontArc,
}

impl ImageCanvas {
    pub fn new(image: RgbaImage, font: FontArc) -> Self {
        Self { image, font }
    }

    /// Canvas over a copy of `image`, labelled with the embedded font
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        Ok(Self::new(image.to_rgba8(), default_font()?))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Save the annotated image; the format follows the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image
            .save(path)
            .map_err(|e| DetectError::Io(std::io::Error::other(e)))
    }
}

impl OverlaySink for ImageCanvas {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn draw_rect(&mut self, rect: BoundingRect, thickness: u32, color: Rgba<u8>) {
        for inset in 0..thickness {
            if rect.width <= 2 * inset || rect.height <= 2 * inset {
                break;
            }
            let ring = Rect::at((rect.x + inset) as i32, (rect.y + inset) as i32)
                .of_size(rect.width - 2 * inset, rect.height - 2 * inset);
            draw_hollow_rect_mut(&mut self.image, ring, color);
        }
    }

    fn draw_circle(&mut self, center: Point, radius: u32, color: Rgba<u8>) {
        draw_filled_circle_mut(&mut self.image, (center.x as i32, center.y as i32), radius as i32, color);
    }

    fn draw_text(&mut self, x: i32, baseline: i32, size: f32, text: &str, color: Rgba<u8>) {
        let scale = PxScale::from(size);
        // imageproc positions text by its top edge
        let ascent = self.font.as_scaled(scale).ascent();
        let top = baseline - ascent.round() as i32;
        draw_text_mut(&mut self.image, color, x, top, scale, &self.font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_canvas() -> ImageCanvas {
        ImageCanvas::new(RgbaImage::new(60, 60), default_font().expect("Should load embedded font"))
    }

    #[test]
    fn test_rect_outline_only() {
        let mut canvas = blank_canvas();
        let green = Rgba([0, 128, 0, 255]);
        canvas.draw_rect(BoundingRect::new(10, 10, 20, 20), 1, green);

        assert_eq!(*canvas.image().get_pixel(10, 10), green);
        assert_eq!(*canvas.image().get_pixel(29, 29), green);
        assert_eq!(*canvas.image().get_pixel(20, 20), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_thick_rect_insets() {
        let mut canvas = blank_canvas();
        let color = Rgba([1, 2, 3, 255]);
        canvas.draw_rect(BoundingRect::new(10, 10, 20, 20), 3, color);

        assert_eq!(*canvas.image().get_pixel(12, 20), color);
        assert_eq!(*canvas.image().get_pixel(13, 20), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_center_marker_filled() {
        let mut canvas = blank_canvas();
        let red = Rgba([255, 0, 0, 255]);
        canvas.draw_circle(Point::new(30, 30), 5, red);

        assert_eq!(*canvas.image().get_pixel(30, 30), red);
        assert_eq!(*canvas.image().get_pixel(33, 30), red);
        assert_eq!(*canvas.image().get_pixel(30, 40), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_text_marks_pixels_above_baseline() {
        let mut canvas = blank_canvas();
        canvas.draw_text(2, 30, 16.0, "Ob 1", Rgba([0, 128, 0, 255]));

        let inked = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[3] > 0)
            .map(|(_, y, _)| y)
            .collect::<Vec<_>>();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&y| y <= 31));
    }
}
