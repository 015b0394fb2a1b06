//! Per-frame target detection pipeline

pub mod config;
pub mod detector;
pub mod result;

pub use config::{AnnotationConfig, OutputMode};
pub use detector::TargetPipeline;
pub use result::{FrameResult, FrameStats};
