pub mod canvas;

pub use canvas::{default_font, load_font, ImageCanvas};

use image::Rgba;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::{traits::OverlaySink, types::DetectedObject};

/// Colours and offsets used when annotating detected objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OverlayStyle {
    /// RGBA colour of the box outline
    pub box_color: [u8; 4],
    pub box_thickness: u32,
    pub center_color: [u8; 4],
    pub center_radius: u32,
    pub label_color: [u8; 4],
    /// Label height in pixels
    pub label_size: f32,
    /// Baseline distance above the box top
    pub label_gap_above: u32,
    /// Baseline distance below the box top when there is no room above
    pub label_offset_below: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            box_color: [0, 128, 0, 255],
            box_thickness: 1,
            center_color: [255, 0, 0, 255],
            center_radius: 5,
            label_color: [0, 128, 0, 255],
            label_size: 16.0,
            label_gap_above: 10,
            label_offset_below: 20,
        }
    }
}

impl OverlayStyle {
    /// Baseline of the label for a box whose top edge is at `top`
    pub fn label_baseline(&self, top: u32) -> i32 {
        let above = top as i32 - self.label_gap_above as i32;
        if above < 0 {
            (top + self.label_offset_below) as i32
        } else {
            above
        }
    }
}

/// Draws box, center marker and "Obj {n}" label for each ranked object
#[derive(Debug, Clone, Default)]
pub struct OverlayRenderer {
    pub style: OverlayStyle,
}

impl OverlayRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn render<S>(&self, objects: &[DetectedObject], sink: &mut S)
    where
        S: OverlaySink + ?Sized,
    {
        let style = &self.style;
        for object in objects {
            sink.draw_rect(object.bounding_rect(), style.box_thickness, Rgba(style.box_color));
            sink.draw_circle(object.center, style.center_radius, Rgba(style.center_color));
            sink.draw_text(
                object.position.x as i32,
                style.label_baseline(object.position.y),
                style.label_size,
                &label_text(object),
                Rgba(style.label_color),
            );
        }
        debug!(objects = objects.len(), "rendered overlay");
    }
}

pub fn label_text(object: &DetectedObject) -> String {
    format!("Obj {}", object.number)
}
