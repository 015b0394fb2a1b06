//! Target geometry: bounding boxes, angle projection and output records

mod bbox;
pub mod geometry;
mod info;

pub use bbox::BoundingBox;
pub use info::TargetInformation;
