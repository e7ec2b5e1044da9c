pub mod distance_2d;
pub mod polygon_2d;
pub mod rotation_3d;

use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Added to the y-delta denominator of the crossing test so horizontal edges
/// never divide by zero. Small enough not to bias results at `f64` precision.
pub const CROSSING_EPSILON: f64 = 1e-9;

/// Fails with `InvalidArgument` unless both coordinates are finite.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` naming `what` for NaN or infinite
/// coordinates.
pub fn ensure_finite(point: &Point2, what: &str) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidArgument(format!(
            "{what} has non-finite coordinates ({}, {})",
            point.x, point.y
        ))
        .into())
    }
}

/// Fails with `InvalidArgument` unless `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` naming `what` otherwise.
pub fn ensure_positive(value: f64, what: &str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidArgument(format!(
            "{what} must be positive and finite, got {value}"
        ))
        .into())
    }
}

/// Fails with `InvalidArgument` unless `value` is finite and not negative.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` naming `what` otherwise.
pub fn ensure_non_negative(value: f64, what: &str) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidArgument(format!(
            "{what} must be non-negative and finite, got {value}"
        ))
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_point_passes() {
        assert!(ensure_finite(&Point2::new(1.0, -2.0), "p").is_ok());
    }

    #[test]
    fn nan_and_infinity_rejected() {
        assert!(ensure_finite(&Point2::new(f64::NAN, 0.0), "p")
            .is_err_and(|e| e.is_invalid_argument()));
        assert!(ensure_finite(&Point2::new(0.0, f64::INFINITY), "p").is_err());
    }

    #[test]
    fn positive_check() {
        assert!(ensure_positive(0.5, "r").is_ok());
        assert!(ensure_positive(0.0, "r").is_err());
        assert!(ensure_positive(-1.0, "r").is_err());
        assert!(ensure_positive(f64::NAN, "r").is_err());
    }

    #[test]
    fn non_negative_check() {
        assert!(ensure_non_negative(16.0, "t").is_ok());
        assert!(ensure_non_negative(0.0, "t").is_ok());
        assert!(ensure_non_negative(-0.5, "t").is_err());
    }
}
