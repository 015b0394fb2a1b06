//! Border following on top of `imageproc`

use super::Contour;
use crate::traits::ContourExtractor;
use crate::Result;
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};

/// Imageproc-based contour extractor.
///
/// Keeps outer borders of regions that are not nested inside another
/// region's hole, which matches external-only retrieval.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_contours(&self, mask: &GrayImage) -> Result<Vec<Contour>> {
        if mask.width() == 0 || mask.height() == 0 {
            return Ok(Vec::new());
        }

        let contours = find_contours::<i32>(mask)
            .into_iter()
            .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
            .map(|c| Contour::new(c.points.iter().map(|p| (p.x, p.y)).collect()))
            .collect();

        Ok(contours)
    }
}
