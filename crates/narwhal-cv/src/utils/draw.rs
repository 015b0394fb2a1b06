//! Overlay drawing on frames

use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use narwhal_core::BoundingBox;

/// Draw a hollow box `thickness` pixels wide, growing outwards from `bbox`.
/// Parts outside the image are clipped.
pub fn draw_box(img: &mut RgbImage, bbox: &BoundingBox, color: [u8; 3], thickness: u32) {
    if bbox.is_empty() {
        return;
    }
    for offset in 0..thickness.max(1) as i32 {
        let rect = Rect::at(bbox.left - offset, bbox.top - offset).of_size(
            (bbox.width() + offset * 2) as u32,
            (bbox.height() + offset * 2) as u32,
        );
        draw_hollow_rect_mut(img, rect, Rgb(color));
    }
}

/// Overwrite `frame` with `mask` rendered in greyscale.
///
/// Sizes must match; a mismatched mask leaves the frame untouched.
pub fn paint_mask(frame: &mut RgbImage, mask: &GrayImage) {
    if frame.dimensions() != mask.dimensions() {
        return;
    }
    for (dst, src) in frame.pixels_mut().zip(mask.pixels()) {
        *dst = Rgb([src[0], src[0], src[0]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    const RED: [u8; 3] = [255, 0, 0];

    #[test]
    fn test_box_outline_only() {
        let mut img = RgbImage::new(20, 20);
        draw_box(&mut img, &BoundingBox::new(5, 5, 15, 15), RED, 1);

        assert_eq!(*img.get_pixel(5, 5), Rgb(RED));
        assert_eq!(*img.get_pixel(14, 14), Rgb(RED));
        assert_eq!(*img.get_pixel(10, 10), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(15, 15), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_thick_box_is_clipped() {
        let mut img = RgbImage::new(10, 10);
        draw_box(&mut img, &BoundingBox::new(0, 0, 10, 10), RED, 3);
        assert_eq!(*img.get_pixel(0, 0), Rgb(RED));
        assert_eq!(*img.get_pixel(5, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_empty_box_draws_nothing() {
        let mut img = RgbImage::new(10, 10);
        draw_box(&mut img, &BoundingBox::new(4, 4, 4, 8), RED, 1);
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_paint_mask() {
        let mut frame = RgbImage::from_pixel(3, 2, Rgb([9, 9, 9]));
        let mut mask = GrayImage::new(3, 2);
        mask.put_pixel(1, 1, Luma([255]));

        paint_mask(&mut frame, &mask);
        assert_eq!(*frame.get_pixel(1, 1), Rgb([255, 255, 255]));
        assert_eq!(*frame.get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}
