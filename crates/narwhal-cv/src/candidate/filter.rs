use super::CandidateDescriptor;
use narwhal_core::TargetConfig;
use std::fmt;

/// Why a candidate was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The contour encloses no area
    Degenerate,
    /// Bounding box is below the minimum share of the frame
    TooSmall,
    /// One side is shorter than the configured minimum
    TooNarrow,
    /// Aspect ratio is outside the fuzz band around the target's
    AspectMismatch,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::Degenerate => "degenerate contour",
            Rejection::TooSmall => "area below minimum",
            Rejection::TooNarrow => "side below minimum",
            Rejection::AspectMismatch => "aspect ratio out of band",
        };
        f.write_str(reason)
    }
}

/// Check one candidate against the rejection rules
pub fn rejection(
    candidate: &CandidateDescriptor,
    config: &TargetConfig,
    frame_area: f64,
) -> Option<Rejection> {
    if candidate.is_degenerate() {
        return Some(Rejection::Degenerate);
    }
    if frame_area <= 0.0
        || candidate.bounding_box_area * 100.0 / frame_area < config.min_area_percent
    {
        return Some(Rejection::TooSmall);
    }
    let min_side = i32::try_from(config.min_side_px).unwrap_or(i32::MAX);
    if candidate.bounding_box.width() < min_side || candidate.bounding_box.height() < min_side {
        return Some(Rejection::TooNarrow);
    }
    let fuzz = config.aspect_fuzz_factor;
    let q = candidate.aspect_quotient;
    if !(1.0 / fuzz < q && q < fuzz) {
        return Some(Rejection::AspectMismatch);
    }
    None
}

/// Keep candidates that pass every rejection rule, preserving order
pub fn filter(
    candidates: Vec<CandidateDescriptor>,
    config: &TargetConfig,
    frame_area: f64,
) -> Vec<CandidateDescriptor> {
    candidates
        .into_iter()
        .filter(|candidate| match rejection(candidate, config, frame_area) {
            Some(reason) => {
                log::trace!("Rejected candidate {}: {}", candidate.index, reason);
                false
            }
            None => true,
        })
        .collect()
}
