//! # Object Scan
//!
//! Detects discrete foreground objects on a flat background and measures them:
//! bounding boxes, centers, corners and the gaps between the objects' union
//! extent and the image edges.
//!
//! ## Pipeline
//!
//! 1. **Mask**: alpha channel when present, otherwise Otsu-thresholded luminance
//! 2. **Contours**: outermost contours only, rectangles of 100 px² or less dropped as noise
//! 3. **Measurement**: center and corners per rectangle
//! 4. **Ordering**: stable sort by center x, ranks 1..N, edge distances
//!
//! Rendering is a separate consumer of the ranked objects and never alters the result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use objscan::{ImageCanvas, ObjectDetector, Pipeline};
//!
//! let detector = ObjectDetector::ready(Pipeline::default());
//!
//! let image = image::open("objects.png")?;
//! let mut canvas = ImageCanvas::from_image(&image)?;
//! let result = detector.process_and_render(&image, &mut canvas)?;
//!
//! println!("{}", result.to_json_pretty()?);
//! canvas.save("objects_annotated.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod overlay;
pub mod detector;
pub mod io;

pub use error::{DetectError, Result};
pub use types::*;
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use overlay::{ImageCanvas, OverlayRenderer, OverlayStyle};
pub use detector::ObjectDetector;
