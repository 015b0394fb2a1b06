//! Output and overlay options

use serde::{Deserialize, Serialize};

/// What the pipeline leaves in the caller's frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Original pixels with candidate boxes drawn on top
    #[default]
    Annotated,
    /// The colour-threshold mask in greyscale; no targets are produced
    ColorFilter,
}

/// Overlay drawing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    pub mode: OutputMode,
    pub draw_survivors: bool,
    pub draw_winners: bool,
    pub survivor_color: [u8; 3],
    pub winner_color: [u8; 3],
    pub thickness: u32,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Annotated,
            draw_survivors: true,
            draw_winners: true,
            survivor_color: [255, 0, 0],
            winner_color: [0, 255, 0],
            thickness: 1,
        }
    }
}

impl AnnotationConfig {
    /// Leave the frame untouched
    pub fn disabled() -> Self {
        Self {
            draw_survivors: false,
            draw_winners: false,
            ..Self::default()
        }
    }

    /// Replace the frame with the threshold mask
    pub fn color_filter() -> Self {
        Self {
            mode: OutputMode::ColorFilter,
            ..Self::default()
        }
    }
}
