//! Pinhole projection from pixel offsets to angles
//!
//! All angles are in degrees. Offsets are measured from the frame centre, so
//! a point on the optical axis is at 0° on both axes.

/// Angle whose pixel offset from centre is `offset` on an axis `extent`
/// pixels long seen through `fov_deg` degrees.
fn axis_angle(offset: f64, extent: f64, fov_deg: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (offset * fov_deg.to_radians().tan() / extent)
        .atan()
        .to_degrees()
}

/// Horizontal offset, positive to the right of centre
pub fn horizontal_angle(center_x: f64, frame_width: u32, horizontal_fov: f64) -> f64 {
    let width = frame_width as f64;
    axis_angle(center_x - width / 2.0, width, horizontal_fov)
}

/// Vertical offset, positive below centre
pub fn vertical_angle(center_y: f64, frame_height: u32, vertical_fov: f64) -> f64 {
    let height = frame_height as f64;
    axis_angle(center_y - height / 2.0, height, vertical_fov)
}

/// Vertical offset as historically reported: positive above centre and
/// scaled with the horizontal field of view and frame width.
pub fn legacy_vertical_angle(
    center_y: f64,
    frame_width: u32,
    frame_height: u32,
    horizontal_fov: f64,
) -> f64 {
    let offset = -(center_y - frame_height as f64 / 2.0);
    axis_angle(offset, frame_width as f64, horizontal_fov)
}

/// Straight-line distance to a target at a known height, valid only with a
/// level camera. `None` when the angle is too close to ±90° to divide by.
pub fn slant_distance(
    target_height: f64,
    camera_height: f64,
    vertical_angle_deg: f64,
) -> Option<f64> {
    let cos = vertical_angle_deg.to_radians().cos();
    if !cos.is_finite() || cos.abs() < 1e-6 {
        return None;
    }
    let distance = (target_height - camera_height) / cos;
    distance.is_finite().then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_is_on_axis() {
        for fov in [1.0, 45.0, 60.0, 89.0] {
            assert_eq!(horizontal_angle(50.0, 100, fov), 0.0);
            assert_eq!(vertical_angle(100.0, 200, fov), 0.0);
        }
    }

    #[test]
    fn test_edge_of_frame() {
        // half the frame width through a 45 degree FOV: atan(0.5)
        let angle = horizontal_angle(100.0, 100, 45.0);
        assert_relative_eq!(angle, 0.5f64.atan().to_degrees(), epsilon = 1e-9);
        assert_relative_eq!(horizontal_angle(0.0, 100, 45.0), -angle, epsilon = 1e-9);
    }

    #[test]
    fn test_vertical_uses_own_axis() {
        let vertical = vertical_angle(30.0, 200, 45.0);
        let expected = ((30.0 - 100.0) * 45f64.to_radians().tan() / 200.0)
            .atan()
            .to_degrees();
        assert_relative_eq!(vertical, expected, epsilon = 1e-9);
        assert!(vertical < 0.0);
    }

    #[test]
    fn test_legacy_vertical_flips_sign_and_uses_width() {
        let legacy = legacy_vertical_angle(30.0, 100, 200, 60.0);
        let expected = ((100.0 - 30.0) * 60f64.to_radians().tan() / 100.0)
            .atan()
            .to_degrees();
        assert_relative_eq!(legacy, expected, epsilon = 1e-9);
        assert!(legacy > 0.0);
    }

    #[test]
    fn test_zero_sized_frame() {
        assert_eq!(horizontal_angle(10.0, 0, 60.0), 0.0);
    }

    #[test]
    fn test_slant_distance() {
        assert_eq!(slant_distance(200.0, 50.0, 0.0), Some(150.0));
        let d = slant_distance(200.0, 50.0, 60.0).unwrap();
        assert_relative_eq!(d, 300.0, epsilon = 1e-9);
        assert_eq!(slant_distance(200.0, 50.0, 90.0), None);
    }
}
