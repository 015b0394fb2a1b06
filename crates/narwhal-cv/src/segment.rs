//! HSV colour thresholding

use image::{GrayImage, RgbImage};
use narwhal_core::color::rgb_to_hsv;
use narwhal_core::ColorBand;

/// Mask value for pixels inside the band
pub const MASK_ON: u8 = 255;
/// Mask value for pixels outside the band
pub const MASK_OFF: u8 = 0;

/// Thresholds frames into a binary mask, reusing one mask buffer across
/// frames. The buffer is reallocated only when the frame size changes.
#[derive(Debug, Clone)]
pub struct ColorSegmenter {
    mask: GrayImage,
}

impl Default for ColorSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSegmenter {
    pub fn new() -> Self {
        Self {
            mask: GrayImage::new(0, 0),
        }
    }

    /// Threshold `frame` against `band`.
    ///
    /// Every pixel of the returned mask is rewritten on each call, so nothing
    /// from a previous frame survives.
    pub fn segment(&mut self, frame: &RgbImage, band: &ColorBand) -> &GrayImage {
        let (width, height) = frame.dimensions();
        if self.mask.dimensions() != (width, height) {
            self.mask = GrayImage::new(width, height);
        }
        threshold_into(frame, band, &mut self.mask);
        &self.mask
    }

    /// The mask produced by the last call to [`segment`](Self::segment)
    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }
}

/// Threshold `frame` into a freshly allocated mask
pub fn segment(frame: &RgbImage, band: &ColorBand) -> GrayImage {
    let mut mask = GrayImage::new(frame.width(), frame.height());
    threshold_into(frame, band, &mut mask);
    mask
}

#[cfg(not(feature = "parallel"))]
fn threshold_into(frame: &RgbImage, band: &ColorBand, mask: &mut GrayImage) {
    threshold_row(frame.as_raw(), band, mask);
}

#[cfg(feature = "parallel")]
fn threshold_into(frame: &RgbImage, band: &ColorBand, mask: &mut GrayImage) {
    use rayon::prelude::*;

    let width = frame.width() as usize;
    if width == 0 {
        return;
    }
    let out: &mut [u8] = mask;
    out.par_chunks_mut(width)
        .zip(frame.as_raw().par_chunks(width * 3))
        .for_each(|(out_row, rgb_row)| threshold_row(rgb_row, band, out_row));
}

#[inline]
fn threshold_row(rgb: &[u8], band: &ColorBand, out: &mut [u8]) {
    if band.is_empty() {
        out.fill(MASK_OFF);
        return;
    }
    for (px, dst) in rgb.chunks_exact(3).zip(out.iter_mut()) {
        let hsv = rgb_to_hsv(px[0], px[1], px[2]);
        *dst = if band.contains(hsv) { MASK_ON } else { MASK_OFF };
    }
}
