use std::sync::Arc;

use image::DynamicImage;
use tracing::{debug, warn};
use crate::{
    error::{DetectError, Result},
    overlay::OverlayRenderer,
    pipeline::Pipeline,
    traits::OverlaySink,
    types::DetectionResult,
};

#[derive(Clone, Default)]
enum RuntimeState {
    #[default]
    Uninitialized,
    Ready(Arc<Pipeline>),
}

/// Entry point for detection runs, gated on runtime initialization.
///
/// Requests made before [`ObjectDetector::initialize`] are rejected with
/// [`DetectError::InputUnavailable`]; nothing is queued.
#[derive(Clone, Default)]
pub struct ObjectDetector {
    state: RuntimeState,
    renderer: OverlayRenderer,
}

impl ObjectDetector {
    /// Create an uninitialized detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector that is ready to process with the given pipeline
    pub fn ready(pipeline: Pipeline) -> Self {
        let mut detector = Self::new();
        detector.initialize(pipeline);
        detector
    }

    pub fn initialize(&mut self, pipeline: Pipeline) {
        self.state = RuntimeState::Ready(Arc::new(pipeline));
        debug!("vision runtime ready");
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, RuntimeState::Ready(_))
    }

    pub fn with_renderer(mut self, renderer: OverlayRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }

    fn pipeline(&self) -> Result<&Pipeline> {
        match &self.state {
            RuntimeState::Ready(pipeline) => Ok(pipeline.as_ref()),
            RuntimeState::Uninitialized => {
                warn!("rejecting detection request: vision runtime not initialized");
                Err(DetectError::InputUnavailable)
            }
        }
    }

    /// Detect objects in a decoded pixel buffer
    pub fn process(&self, image: &DynamicImage) -> Result<DetectionResult> {
        self.pipeline()?.process(image)
    }

    /// Decode encoded file bytes, then detect
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<(DynamicImage, DetectionResult)> {
        let pipeline = self.pipeline()?;
        let image = image::load_from_memory(bytes)?;
        let result = pipeline.process(&image)?;
        Ok((image, result))
    }

    /// Detect, then annotate `sink` with the ranked objects
    pub fn process_and_render<S>(&self, image: &DynamicImage, sink: &mut S) -> Result<DetectionResult>
    where
        S: OverlaySink + ?Sized,
    {
        let result = self.process(image)?;
        self.renderer.render(&result.objects, sink);
        Ok(result)
    }
}
