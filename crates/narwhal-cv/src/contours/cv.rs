//! OpenCV `findContours` backend

use super::Contour;
use crate::traits::ContourExtractor;
use crate::Result;
use image::GrayImage;
use opencv::{
    core::{Mat, Point, Vector},
    imgproc,
    prelude::*,
};

/// Contour extractor backed by OpenCV's border following with external
/// retrieval and simple chain approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvContourExtractor;

impl ContourExtractor for OpenCvContourExtractor {
    fn extract_contours(&self, mask: &GrayImage) -> Result<Vec<Contour>> {
        if mask.width() == 0 || mask.height() == 0 {
            return Ok(Vec::new());
        }

        let mat = Mat::from_slice_rows_cols(
            mask.as_raw(),
            mask.height() as usize,
            mask.width() as usize,
        )?
        .try_clone()?;

        let mut found: Vector<Vector<Point>> = Vector::new();
        imgproc::find_contours(
            &mat,
            &mut found,
            imgproc::RETR_EXTERNAL,
            imgproc::CHAIN_APPROX_SIMPLE,
            Point::new(0, 0),
        )?;

        // OpenCV reports external contours bottom-up; flip to raster order
        let mut contours: Vec<Contour> = found
            .iter()
            .map(|c| Contour::new(c.iter().map(|p| (p.x, p.y)).collect()))
            .collect();
        contours.sort_by_key(|c| {
            c.points
                .iter()
                .map(|&(x, y)| (y, x))
                .min()
                .unwrap_or((i32::MAX, i32::MAX))
        });

        Ok(contours)
    }
}
