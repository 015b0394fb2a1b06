//! Contours of foreground regions and the backends that trace them

mod border;
#[cfg(feature = "opencv")]
mod cv;

pub use border::ImageprocContourExtractor;
#[cfg(feature = "opencv")]
pub use cv::OpenCvContourExtractor;

use narwhal_core::BoundingBox;

/// Ordered boundary of one connected mask region, in pixel coordinates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    pub points: Vec<(i32, i32)>,
}

impl Contour {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest box enclosing every boundary point
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.points.iter().copied())
    }

    /// Area enclosed by the boundary polygon (shoelace formula).
    ///
    /// The polygon runs through pixel centres, so a one pixel wide line or a
    /// single pixel encloses nothing.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: i64 = (0..n)
            .map(|i| {
                let (x0, y0) = self.points[i];
                let (x1, y1) = self.points[(i + 1) % n];
                x0 as i64 * y1 as i64 - x1 as i64 * y0 as i64
            })
            .sum();
        twice.abs() as f64 / 2.0
    }
}
