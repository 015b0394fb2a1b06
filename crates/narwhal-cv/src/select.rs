//! Ranking and selection of scored candidates

use crate::candidate::CandidateDescriptor;

/// Picks the best-scoring candidates of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSelector {
    max_targets: usize,
}

impl TargetSelector {
    pub fn new(max_targets: usize) -> Self {
        Self { max_targets }
    }

    pub fn max_targets(&self) -> usize {
        self.max_targets
    }

    /// Rank `candidates` in place and return the winning prefix: up to
    /// `max_targets` by descending score, ties going to the candidate
    /// discovered first.
    pub fn select<'a>(
        &self,
        candidates: &'a mut [CandidateDescriptor],
    ) -> &'a [CandidateDescriptor] {
        rank(candidates);
        let winners = self.max_targets.min(candidates.len());
        &candidates[..winners]
    }
}

/// Sort by descending score, keeping discovery order between equal scores
pub fn rank(candidates: &mut [CandidateDescriptor]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
