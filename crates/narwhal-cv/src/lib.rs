//! Narwhal computer vision library
//!
//! Per-frame colour target detection: threshold a frame in HSV space, trace
//! the regions that survive, score their shapes against the configured
//! target and resolve the winners into angles off the camera axis.

pub mod candidate;
pub mod contours;
pub mod error;
pub mod pipeline;
pub mod segment;
pub mod select;
pub mod utils;

// Re-export commonly used types
pub use candidate::{CandidateDescriptor, Rejection};
pub use contours::{Contour, ImageprocContourExtractor};
pub use error::PipelineError;
pub use pipeline::{AnnotationConfig, FrameResult, FrameStats, OutputMode, TargetPipeline};
pub use segment::ColorSegmenter;
pub use select::TargetSelector;

#[cfg(feature = "opencv")]
pub use contours::OpenCvContourExtractor;

pub use narwhal_core::{
    BoundingBox, CameraConfig, ColorBand, ConfigSource, PipelineConfig, SharedConfig,
    TargetConfig, TargetInformation,
};

// Error handling
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Core traits for the CV system
pub mod traits {
    use super::*;
    use image::GrayImage;

    /// Traces the boundaries of foreground regions in a binary mask.
    ///
    /// Implementations return only outer boundaries of top-level regions, in
    /// the order they are first met scanning rows top to bottom and columns
    /// left to right.
    pub trait ContourExtractor {
        fn extract_contours(&self, mask: &GrayImage) -> Result<Vec<Contour>>;
    }
}
