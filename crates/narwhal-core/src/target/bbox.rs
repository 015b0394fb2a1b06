//! Axis-aligned bounding boxes in pixel coordinates

use serde::{Deserialize, Serialize};

/// Pixel rectangle with its origin at the top-left of the frame.
///
/// `right` and `bottom` are exclusive, so a box around a single pixel at
/// `(x, y)` is `{x, y, x + 1, y + 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create from origin and size
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Smallest box enclosing every point, or `None` for no points
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);
        for (x, y) in iter {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Some(Self::new(min_x, min_y, max_x + 1, max_y + 1))
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Area in square pixels; zero for empty or inverted boxes
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.width() as f64 * self.height() as f64
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Centre point, which may fall between pixels
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) as f64 / 2.0,
            (self.top + self.bottom) as f64 / 2.0,
        )
    }

    /// Width over height, `None` when the box has no height
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height() <= 0 {
            return None;
        }
        Some(self.width() as f64 / self.height() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_uses_exclusive_edges() {
        let bbox = BoundingBox::enclosing([(40, 40), (59, 40), (59, 59), (40, 59)]);
        assert_eq!(bbox, Some(BoundingBox::new(40, 40, 60, 60)));
        assert_eq!(bbox.map(|b| b.area()), Some(400.0));
    }

    #[test]
    fn test_enclosing_nothing() {
        assert_eq!(BoundingBox::enclosing(std::iter::empty()), None);
    }

    #[test]
    fn test_center_and_aspect() {
        let bbox = BoundingBox::new(10, 10, 30, 50);
        assert_eq!(bbox.center(), (20.0, 30.0));
        assert_eq!(bbox.aspect_ratio(), Some(0.5));
        assert_eq!(BoundingBox::new(0, 5, 10, 5).aspect_ratio(), None);
    }

    #[test]
    fn test_inverted_box_has_no_area() {
        assert_eq!(BoundingBox::new(10, 10, 5, 20).area(), 0.0);
    }
}
