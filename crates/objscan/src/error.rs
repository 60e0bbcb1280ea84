use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Vision runtime is not initialized yet, try again once it is ready")]
    InputUnavailable,

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Vision primitive failed: {0}")]
    Primitive(String),

    #[error("Failed to load overlay font: {0}")]
    Font(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectError>;
