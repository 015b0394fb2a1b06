//! Narwhal Vision core library
//!
//! Configuration snapshots, target geometry and colour helpers shared by the
//! vision pipeline and its collaborators. Nothing in here touches pixels.

pub mod color;
pub mod config;
pub mod error;
pub mod target;

// Re-export commonly used types
pub use config::{
    CameraConfig, ChannelRange, ColorBand, ConfigSource, PipelineConfig, SharedConfig,
    TargetConfig, VerticalAngleMode,
};
pub use error::ConfigError;
pub use target::{BoundingBox, TargetInformation};
