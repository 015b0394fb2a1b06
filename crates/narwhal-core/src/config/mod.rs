//! Pipeline configuration
//!
//! Snapshots of the thresholds and camera parameters a pipeline runs with.
//! They are plain values: a pipeline copies one at construction and on an
//! explicit reload, never reading a live shared object mid-frame.

mod band;
mod shared;

pub use band::{ChannelRange, ColorBand};
pub use shared::{ConfigSource, SharedConfig};

use crate::error::ConfigError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shape thresholds and selection limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub color_band: ColorBand,
    /// Minimum bounding-box area as a percentage of the frame area
    pub min_area_percent: f64,
    /// Bounding-box area over contour area, in percent, that a perfect target
    /// would have. Never below 100 for a real region; 200 is a half-filled box.
    pub target_fill_percent: f64,
    /// Width over height of the physical target
    pub target_aspect_ratio: f64,
    /// Largest accepted factor between a candidate's aspect and the target's
    pub aspect_fuzz_factor: f64,
    pub max_targets: usize,
    /// Reject boxes narrower or shorter than this many pixels (0 disables)
    pub min_side_px: u32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            color_band: ColorBand::default(),
            min_area_percent: 50.0,
            target_fill_percent: 200.0,
            target_aspect_ratio: 1.0,
            aspect_fuzz_factor: 2.0,
            max_targets: 1,
            min_side_px: 0,
        }
    }
}

impl TargetConfig {
    /// Set the target aspect ratio from a `width:height` pair.
    ///
    /// `rotated` swaps the pair for sensors mounted on their side, where the
    /// image's horizontal axis is the target's vertical one.
    pub fn set_aspect_parts(
        &mut self,
        width: u32,
        height: u32,
        rotated: bool,
    ) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::invalid(
                "target_aspect_ratio",
                format!("aspect parts must be non-zero, got {}:{}", width, height),
            ));
        }
        let (w, h) = if rotated { (height, width) } else { (width, height) };
        self.target_aspect_ratio = w as f64 / h as f64;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_area_percent.is_finite() || !(0.0..=100.0).contains(&self.min_area_percent) {
            return Err(ConfigError::invalid(
                "min_area_percent",
                format!("expected 0..=100, got {}", self.min_area_percent),
            ));
        }
        if !self.target_fill_percent.is_finite() || self.target_fill_percent < 100.0 {
            return Err(ConfigError::invalid(
                "target_fill_percent",
                format!("expected at least 100, got {}", self.target_fill_percent),
            ));
        }
        if !self.target_aspect_ratio.is_finite() || self.target_aspect_ratio <= 0.0 {
            return Err(ConfigError::invalid(
                "target_aspect_ratio",
                format!("expected a positive number, got {}", self.target_aspect_ratio),
            ));
        }
        if !self.aspect_fuzz_factor.is_finite() || self.aspect_fuzz_factor <= 1.0 {
            return Err(ConfigError::invalid(
                "aspect_fuzz_factor",
                format!("expected a number above 1, got {}", self.aspect_fuzz_factor),
            ));
        }
        if self.max_targets == 0 {
            return Err(ConfigError::invalid("max_targets", "must be at least 1"));
        }
        Ok(())
    }

    /// Load and validate a target configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config: Self = read_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }
}

/// Which formula produces the vertical angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAngleMode {
    /// Vertical field of view over frame height, positive below centre.
    #[default]
    Corrected,
    /// Historical output: horizontal field of view over frame width, positive
    /// above centre. Only for consumers calibrated against old results.
    Legacy,
}

/// Camera optics needed to turn pixel offsets into angles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Horizontal field of view in degrees
    pub horizontal_fov: f32,
    /// Vertical field of view in degrees
    pub vertical_fov: f32,
    pub vertical_angle_mode: VerticalAngleMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            horizontal_fov: 67.0,
            vertical_fov: 67.0,
            vertical_angle_mode: VerticalAngleMode::Corrected,
        }
    }
}

impl CameraConfig {
    pub fn new(horizontal_fov: f32, vertical_fov: f32) -> Self {
        Self {
            horizontal_fov,
            vertical_fov,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, fov) in [
            ("horizontal_fov", self.horizontal_fov),
            ("vertical_fov", self.vertical_fov),
        ] {
            // tan(fov) must stay finite and positive
            if !fov.is_finite() || fov <= 0.0 || fov >= 90.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("expected degrees in (0, 90), got {}", fov),
                ));
            }
        }
        Ok(())
    }
}

/// Everything a pipeline reads at construction and reload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub target: TargetConfig,
    pub camera: CameraConfig,
}

impl PipelineConfig {
    pub fn new(target: TargetConfig, camera: CameraConfig) -> Self {
        Self { target, camera }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target.validate()?;
        self.camera.validate()
    }

    /// Parse and validate a configuration from JSON text
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(text).context("Failed to parse pipeline configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config: Self = read_json(path.as_ref())?;
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {:?}", path.as_ref()))?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize pipeline configuration")
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse JSON in {:?}", path))
}
