//! Per-frame pipeline output

use crate::candidate::CandidateDescriptor;
use narwhal_core::TargetInformation;
use serde::{Deserialize, Serialize};

/// Counters for one processed frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    pub contours: usize,
    pub survivors: usize,
    pub winners: usize,
    pub processing_time_us: u64,
}

/// Targets found in one frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameResult {
    /// Winners by descending score, at most `max_targets`
    pub targets: Vec<TargetInformation>,
    /// Every candidate that passed filtering, by descending score. The first
    /// `targets.len()` entries are the winners.
    pub candidates: Vec<CandidateDescriptor>,
    pub stats: FrameStats,
}

impl FrameResult {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// The best target, if any
    pub fn best(&self) -> Option<&TargetInformation> {
        self.targets.first()
    }
}
