//! Utility modules

pub mod draw;
pub mod image;

pub use draw::{draw_box, paint_mask};
pub use self::image::ImageUtils;
