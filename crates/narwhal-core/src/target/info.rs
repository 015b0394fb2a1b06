//! Per-target output record

use super::bbox::BoundingBox;
use super::geometry;
use crate::config::{CameraConfig, VerticalAngleMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description of one detected target, handed to the transport.
///
/// Values are `f32` because the receiver has no use for more precision on the
/// wire. Coordinates are in pixels with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInformation {
    pub area: f32,
    pub bounding_rect_left: f32,
    pub bounding_rect_top: f32,
    pub bounding_rect_right: f32,
    pub bounding_rect_bottom: f32,
    pub bounding_rect_width: f32,
    pub bounding_rect_height: f32,
    pub bounding_rect_center_x: f32,
    pub bounding_rect_center_y: f32,
    pub image_width: u32,
    pub image_height: u32,
    pub horizontal_fov: f32,
    pub vertical_fov: f32,
    /// Degrees right of the optical axis
    pub horizontal_angle: f32,
    /// Degrees off the optical axis; sign depends on the camera's
    /// [`VerticalAngleMode`]
    pub vertical_angle: f32,
}

impl TargetInformation {
    /// Resolve a winner's box against the frame size and camera optics
    pub fn resolve(
        bbox: &BoundingBox,
        image_width: u32,
        image_height: u32,
        camera: &CameraConfig,
    ) -> Self {
        let (center_x, center_y) = bbox.center();
        let hfov = camera.horizontal_fov as f64;
        let vfov = camera.vertical_fov as f64;

        let horizontal_angle = geometry::horizontal_angle(center_x, image_width, hfov);
        let vertical_angle = match camera.vertical_angle_mode {
            VerticalAngleMode::Corrected => {
                geometry::vertical_angle(center_y, image_height, vfov)
            }
            VerticalAngleMode::Legacy => {
                geometry::legacy_vertical_angle(center_y, image_width, image_height, hfov)
            }
        };

        Self {
            area: bbox.area() as f32,
            bounding_rect_left: bbox.left as f32,
            bounding_rect_top: bbox.top as f32,
            bounding_rect_right: bbox.right as f32,
            bounding_rect_bottom: bbox.bottom as f32,
            bounding_rect_width: bbox.width() as f32,
            bounding_rect_height: bbox.height() as f32,
            bounding_rect_center_x: center_x as f32,
            bounding_rect_center_y: center_y as f32,
            image_width,
            image_height,
            horizontal_fov: camera.horizontal_fov,
            vertical_fov: camera.vertical_fov,
            horizontal_angle: horizontal_angle as f32,
            vertical_angle: vertical_angle as f32,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.bounding_rect_left as i32,
            self.bounding_rect_top as i32,
            self.bounding_rect_right as i32,
            self.bounding_rect_bottom as i32,
        )
    }

    /// Estimated straight-line distance to the target, in the unit of the
    /// heights given.
    ///
    /// Both heights are measured from the ground: `target_height` to the
    /// target's centre, `camera_height` to the lens. Only meaningful with a
    /// level camera; `None` when the vertical angle is too close to ±90°.
    pub fn target_distance(&self, target_height: f32, camera_height: f32) -> Option<f32> {
        geometry::slant_distance(
            target_height as f64,
            camera_height as f64,
            self.vertical_angle as f64,
        )
        .map(|d| d as f32)
    }
}

impl fmt::Display for TargetInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TargetInformation: center: ({}, {}), bounding box: ({}, {}), image size: ({}, {}), \
             horizontal angle offset: {} deg, vertical angle offset: {} deg",
            self.bounding_rect_center_x,
            self.bounding_rect_center_y,
            self.bounding_rect_width,
            self.bounding_rect_height,
            self.image_width,
            self.image_height,
            self.horizontal_angle,
            self.vertical_angle,
        )
    }
}
