//! Candidate descriptors built from contours
//!
//! A descriptor carries the shape measurements the filter and scorer need.
//! Descriptors live for one frame only.

mod builder;
mod filter;
mod score;

pub use builder::build;
pub use filter::{filter, rejection, Rejection};
pub use score::{score, score_all, SCORE_NORMALIZATION};

use narwhal_core::BoundingBox;
use serde::{Deserialize, Serialize};

/// Shape measurements of one contour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDescriptor {
    /// Position of the source contour in discovery order
    pub index: usize,
    pub bounding_box: BoundingBox,
    pub contour_area: f64,
    pub bounding_box_area: f64,
    /// Width over height of the bounding box
    pub aspect_ratio: f64,
    /// Bounding-box area over contour area; `None` when the contour encloses
    /// no area. Always at least 1 for a real region.
    pub fill_ratio: Option<f64>,
    /// Aspect ratio over the target's, inverted when below 1
    pub aspect_quotient: f64,
    /// Match score, larger is better; zero until scored
    pub score: f64,
}

impl CandidateDescriptor {
    pub fn is_degenerate(&self) -> bool {
        self.fill_ratio.is_none()
    }
}

/// Ratio between two aspect ratios, always expressed as a value >= 1
pub fn normalized_aspect_quotient(aspect_ratio: f64, target_aspect_ratio: f64) -> f64 {
    let quotient = aspect_ratio / target_aspect_ratio;
    if quotient < 1.0 { 1.0 / quotient } else { quotient }
}
