use image::{DynamicImage, GrayImage};
use imageproc::contours::{find_contours, BorderType};
use tracing::trace;
use crate::{
    error::{DetectError, Result},
    traits::{ThresholdMode, VisionPrimitives},
    types::{BoundingRect, Mask, RawContour},
};

/// `VisionPrimitives` backed by the `image` and `imageproc` crates
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageprocPrimitives;

fn ensure_non_empty(image: &DynamicImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(DetectError::Primitive(format!(
            "pixel buffer is empty ({}x{})",
            image.width(),
            image.height()
        )));
    }
    Ok(())
}

impl VisionPrimitives for ImageprocPrimitives {
    fn split_channels(&self, image: &DynamicImage) -> Result<Vec<GrayImage>> {
        ensure_non_empty(image)?;
        let (width, height) = (image.width(), image.height());

        let (channels, samples) = if image.color().has_alpha() {
            (4, image.to_rgba8().into_raw())
        } else {
            (3, image.to_rgb8().into_raw())
        };

        (0..channels)
            .map(|channel| {
                let plane: Vec<u8> = samples.iter().skip(channel).step_by(channels).copied().collect();
                GrayImage::from_raw(width, height, plane).ok_or_else(|| {
                    DetectError::Primitive(format!(
                        "channel {channel} does not fill a {width}x{height} plane"
                    ))
                })
            })
            .collect()
    }

    fn to_grayscale(&self, image: &DynamicImage) -> Result<GrayImage> {
        ensure_non_empty(image)?;
        Ok(image.to_luma8())
    }

    fn threshold(&self, plane: &GrayImage, mode: ThresholdMode) -> Result<Mask> {
        let level = match mode {
            ThresholdMode::Fixed(level) => level,
            ThresholdMode::AutoBimodal => imageproc::contrast::otsu_level(plane),
        };
        trace!(?mode, level, "thresholding plane");
        Ok(Mask::from_binary(imageproc::contrast::threshold(plane, level)))
    }

    fn trace_external_contours(&self, mask: &Mask) -> Result<Vec<RawContour>> {
        let contours = find_contours::<i32>(mask.as_image());

        let external = contours
            .into_iter()
            .filter(|contour| matches!(contour.border_type, BorderType::Outer) && contour.parent.is_none())
            .map(|contour| RawContour {
                points: contour.points.iter().map(|p| (p.x, p.y)).collect(),
            })
            .collect();

        Ok(external)
    }

    fn bounding_rect(&self, contour: &RawContour) -> Result<BoundingRect> {
        let Some(&(first_x, first_y)) = contour.points.first() else {
            return Err(DetectError::Primitive("cannot bound an empty contour".to_string()));
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first_x, first_y, first_x, first_y);
        for &(x, y) in &contour.points[1..] {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let to_u32 = |value: i32| {
            u32::try_from(value)
                .map_err(|_| DetectError::Primitive(format!("contour point {value} lies outside the image")))
        };

        Ok(BoundingRect::new(
            to_u32(min_x)?,
            to_u32(min_y)?,
            to_u32(max_x - min_x + 1)?,
            to_u32(max_y - min_y + 1)?,
        ))
    }
}
