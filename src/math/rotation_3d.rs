use super::{Point2, Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Rotates `point` about the axis through `axis_point` with unit direction
/// `axis_dir` by `angle` radians (Rodrigues).
///
/// `v' = p0 + v·cosθ + (u × v)·sinθ + u·(u·v)·(1 − cosθ)` with `v = point − p0`.
#[must_use]
pub fn rotate_about_axis(
    point: &Point3,
    axis_point: &Point3,
    axis_dir: &Vector3,
    angle: f64,
) -> Point3 {
    let v = point - axis_point;
    let (sin, cos) = angle.sin_cos();
    let term1 = v * cos;
    let term2 = axis_dir.cross(&v) * sin;
    let term3 = axis_dir * (axis_dir.dot(&v) * (1.0 - cos));
    axis_point + term1 + term2 + term3
}

/// Perspective scale `camZ / (camZ − z)` for a camera on `+Z` looking at `z = 0`.
///
/// # Errors
///
/// Returns `GeometryError::NumericDegeneracy` if the point is at or behind
/// the camera plane.
pub fn perspective_scale(z: f64, camera_distance: f64) -> Result<f64> {
    let denom = camera_distance - z;
    if denom <= TOLERANCE {
        return Err(GeometryError::NumericDegeneracy(format!(
            "depth {z} reaches camera plane at {camera_distance}"
        ))
        .into());
    }
    Ok(camera_distance / denom)
}

/// Projects a 3D point onto the `z = 0` plane from a camera at `(0, 0, camZ)`.
///
/// # Errors
///
/// Returns `GeometryError::NumericDegeneracy` if the point is at or behind
/// the camera plane.
pub fn perspective_project(point: &Point3, camera_distance: f64) -> Result<Point2> {
    let k = perspective_scale(point.z, camera_distance)?;
    Ok(Point2::new(point.x * k, point.y * k))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quarter_turn_about_x_axis() {
        // (0, 1, 0) about the x-axis through the origin by +90° lands on +z.
        let r = rotate_about_axis(
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::origin(),
            &Vector3::x(),
            FRAC_PI_2,
        );
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn points_on_axis_are_fixed() {
        let p0 = Point3::new(3.0, 4.0, 0.0);
        let dir = Vector3::new(1.0, 1.0, 0.0).normalize();
        let on_axis = p0 + dir * 7.5;
        let r = rotate_about_axis(&on_axis, &p0, &dir, 1.234);
        assert_relative_eq!(r, on_axis, epsilon = 1e-9);
    }

    #[test]
    fn rotation_preserves_distance_to_axis_point() {
        let p0 = Point3::new(-2.0, 5.0, 0.0);
        let dir = Vector3::new(0.6, 0.8, 0.0);
        let p = Point3::new(10.0, -3.0, 0.0);
        let r = rotate_about_axis(&p, &p0, &dir, -2.0345);
        assert_relative_eq!((r - p0).norm(), (p - p0).norm(), epsilon = 1e-9);
    }

    #[test]
    fn projection_of_plane_point_is_identity() {
        let q = perspective_project(&Point3::new(12.0, -7.0, 0.0), 1800.0).unwrap();
        assert_relative_eq!(q.x, 12.0);
        assert_relative_eq!(q.y, -7.0);
    }

    #[test]
    fn points_behind_plane_shrink() {
        let k = perspective_scale(-200.0, 1800.0).unwrap();
        assert_relative_eq!(k, 0.9);
        let q = perspective_project(&Point3::new(100.0, 50.0, -200.0), 1800.0).unwrap();
        assert_relative_eq!(q.x, 90.0);
        assert_relative_eq!(q.y, 45.0);
    }

    #[test]
    fn camera_plane_is_degenerate() {
        assert!(perspective_scale(1800.0, 1800.0).is_err_and(|e| e.is_numeric_degeneracy()));
        assert!(perspective_scale(2000.0, 1800.0).is_err());
    }
}
