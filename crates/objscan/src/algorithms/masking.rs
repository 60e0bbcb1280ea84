use image::DynamicImage;
use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use strum::{Display, EnumString, IntoStaticStr, VariantNames};
use tracing::debug;
use crate::{
    error::{DetectError, Result},
    traits::{MaskBuilder, ThresholdMode, VisionPrimitives},
    types::Mask,
};

/// Alpha values above this count as object coverage
pub const ALPHA_LEVEL: u8 = 0;

const ALPHA_PLANE: usize = 3;

/// Which channel data the foreground mask is derived from
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, VariantNames, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MaskStrategy {
    /// Alpha when the buffer carries it, luminance otherwise
    #[default]
    Auto,
    Alpha,
    Luminance,
}

/// Mask builder that picks alpha or Otsu-thresholded luminance
#[derive(Debug, Clone, Default)]
pub struct ChannelMaskBuilder<V> {
    pub primitives: V,
    pub strategy: MaskStrategy,
}

impl<V: VisionPrimitives> ChannelMaskBuilder<V> {
    pub fn new(primitives: V, strategy: MaskStrategy) -> Self {
        Self { primitives, strategy }
    }

    fn alpha_mask(&self, image: &DynamicImage) -> Result<Mask> {
        let planes = self.primitives.split_channels(image)?;
        let alpha = planes.get(ALPHA_PLANE).ok_or_else(|| {
            DetectError::Primitive(format!(
                "alpha mask requested but the buffer has {} channels",
                planes.len()
            ))
        })?;
        self.primitives.threshold(alpha, ThresholdMode::Fixed(ALPHA_LEVEL))
    }

    fn luminance_mask(&self, image: &DynamicImage) -> Result<Mask> {
        let gray = self.primitives.to_grayscale(image)?;
        self.primitives.threshold(&gray, ThresholdMode::AutoBimodal)
    }
}

impl<V: VisionPrimitives> MaskBuilder for ChannelMaskBuilder<V> {
    fn build_mask(&self, image: &DynamicImage) -> Result<Mask> {
        let use_alpha = match self.strategy {
            MaskStrategy::Auto => image.color().has_alpha(),
            MaskStrategy::Alpha => true,
            MaskStrategy::Luminance => false,
        };

        let mask = if use_alpha {
            self.alpha_mask(image)?
        } else {
            self.luminance_mask(image)?
        };

        debug!(
            source = if use_alpha { "alpha" } else { "luminance" },
            foreground = mask.foreground_pixels(),
            "built foreground mask"
        );
        Ok(mask)
    }
}
