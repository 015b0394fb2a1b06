//! Error types for the vision pipeline

use narwhal_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("contour extraction failed: {0}")]
    Contours(String),

    #[cfg(feature = "opencv")]
    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),
}

impl PipelineError {
    pub fn contours<S: Into<String>>(msg: S) -> Self {
        Self::Contours(msg.into())
    }
}
