//! Image loading, saving and pixel layout conversions

use anyhow::{Context, Result};
use image::{RgbImage, RgbaImage};
use std::path::Path;

/// Image utility functions
pub struct ImageUtils;

impl ImageUtils {
    /// Load an image file as RGB, dropping any alpha channel
    pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_rgb8())
    }

    /// Load an image file as RGBA
    pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_rgba8())
    }

    /// Save an RGB image, format chosen from the file extension
    pub fn save_rgb<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
        image
            .save(&path)
            .with_context(|| format!("Failed to save image: {:?}", path.as_ref()))
    }

    /// Convert RGBA to RGB by dropping alpha
    pub fn rgba_to_rgb(rgba_image: &RgbaImage) -> RgbImage {
        let (width, height) = rgba_image.dimensions();
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for px in rgba_image.as_raw().chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
        }
        // length is exactly width * height * 3
        RgbImage::from_raw(width, height, rgb).unwrap_or_else(|| RgbImage::new(width, height))
    }
}
