use super::CandidateDescriptor;
use narwhal_core::TargetConfig;

/// Scale applied to the fill deviation in the score denominator
pub const SCORE_NORMALIZATION: f64 = 100.0;

/// Match score for one candidate; larger is better.
///
/// `contour_area / (K * |fill_ratio * 100 - target_fill_percent| * aspect_quotient)`.
/// A zero denominator means the fill ratio hits the target exactly and scores
/// `+inf`. Degenerate candidates score 0.
pub fn score(candidate: &CandidateDescriptor, config: &TargetConfig) -> f64 {
    let Some(fill_ratio) = candidate.fill_ratio else {
        return 0.0;
    };
    let deviation = (fill_ratio * 100.0 - config.target_fill_percent).abs();
    let denominator = SCORE_NORMALIZATION * deviation * candidate.aspect_quotient;
    if denominator <= 0.0 {
        return f64::INFINITY;
    }
    candidate.contour_area / denominator
}

/// Score every candidate in place
pub fn score_all(candidates: &mut [CandidateDescriptor], config: &TargetConfig) {
    for candidate in candidates.iter_mut() {
        candidate.score = score(candidate, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use narwhal_core::BoundingBox;

    fn candidate(
        contour_area: f64,
        fill_ratio: Option<f64>,
        aspect_quotient: f64,
    ) -> CandidateDescriptor {
        CandidateDescriptor {
            index: 0,
            bounding_box: BoundingBox::new(0, 0, 10, 10),
            contour_area,
            bounding_box_area: 100.0,
            aspect_ratio: 1.0,
            fill_ratio,
            aspect_quotient,
            score: 0.0,
        }
    }

    #[test]
    fn test_formula() {
        let config = TargetConfig {
            target_fill_percent: 100.0,
            ..TargetConfig::default()
        };
        // |1.25 * 100 - 100| = 25, denominator = 100 * 25 * 2
        let s = score(&candidate(80.0, Some(1.25), 2.0), &config);
        assert!((s - 80.0 / 5000.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_fill_scores_infinity() {
        let config = TargetConfig {
            target_fill_percent: 125.0,
            ..TargetConfig::default()
        };
        assert_eq!(score(&candidate(80.0, Some(1.25), 1.0), &config), f64::INFINITY);
    }

    #[test]
    fn test_degenerate_scores_zero() {
        assert_eq!(score(&candidate(0.0, None, 1.0), &TargetConfig::default()), 0.0);
    }

    #[test]
    fn test_closer_shape_scores_higher() {
        let config = TargetConfig {
            target_fill_percent: 110.0,
            ..TargetConfig::default()
        };
        let near = score(&candidate(100.0, Some(1.12), 1.0), &config);
        let far = score(&candidate(100.0, Some(1.5), 1.0), &config);
        let skewed = score(&candidate(100.0, Some(1.12), 3.0), &config);
        assert!(near > far);
        assert!(near > skewed);
    }

    #[test]
    fn test_default_prefers_half_filled_box() {
        use crate::candidate::build;
        use crate::contours::Contour;

        let config = TargetConfig::default();
        let solid = Contour::new(vec![(0, 0), (19, 0), (19, 19), (0, 19)]);
        let wedge = Contour::new(vec![(0, 0), (19, 0), (0, 19)]);
        let mut candidates = build(&[solid, wedge], &config);
        score_all(&mut candidates, &config);

        assert_eq!(candidates[0].bounding_box, candidates[1].bounding_box);
        assert!(candidates[1].fill_ratio > Some(2.0));
        assert!(
            candidates[1].score > candidates[0].score,
            "wedge {} vs solid {}",
            candidates[1].score,
            candidates[0].score
        );
    }

    #[test]
    fn test_score_all_writes_scores() {
        let mut candidates = vec![candidate(80.0, Some(1.25), 1.0), candidate(0.0, None, 1.0)];
        score_all(&mut candidates, &TargetConfig::default());
        assert!(candidates[0].score > 0.0);
        assert_eq!(candidates[1].score, 0.0);
    }
}
