use super::{normalized_aspect_quotient, CandidateDescriptor};
use crate::contours::Contour;
use narwhal_core::TargetConfig;

/// Measure every contour. Contours with no points are skipped; contours that
/// enclose no area are kept with no fill ratio so the filter can reject them.
pub fn build(contours: &[Contour], config: &TargetConfig) -> Vec<CandidateDescriptor> {
    contours
        .iter()
        .enumerate()
        .filter_map(|(index, contour)| describe(index, contour, config.target_aspect_ratio))
        .collect()
}

fn describe(
    index: usize,
    contour: &Contour,
    target_aspect_ratio: f64,
) -> Option<CandidateDescriptor> {
    let bounding_box = contour.bounding_box()?;
    let bounding_box_area = bounding_box.area();
    let contour_area = contour.area();

    let aspect_ratio = bounding_box.aspect_ratio()?;
    let fill_ratio = (contour_area > 0.0).then(|| bounding_box_area / contour_area);

    Some(CandidateDescriptor {
        index,
        bounding_box,
        contour_area,
        bounding_box_area,
        aspect_ratio,
        fill_ratio,
        aspect_quotient: normalized_aspect_quotient(aspect_ratio, target_aspect_ratio),
        score: 0.0,
    })
}
