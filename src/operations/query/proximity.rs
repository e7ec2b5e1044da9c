use crate::error::Result;
use crate::geometry::Edge;
use crate::math::distance_2d::{closest_point_on_segment, point_to_segment_dist};
use crate::math::{ensure_finite, ensure_non_negative, Point2};

/// Result of a closest point query against an edge.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the edge.
    pub point: Point2,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Distance from `point` to the segment `edge.a`→`edge.b`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to that endpoint.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` if the point or an endpoint is
/// not finite.
pub fn distance_to_segment(point: &Point2, edge: &Edge) -> Result<f64> {
    ensure_finite(point, "query point")?;
    ensure_finite(&edge.a, "edge start")?;
    ensure_finite(&edge.b, "edge end")?;
    Ok(point_to_segment_dist(point, &edge.a, &edge.b))
}

/// Closest point on `edge` to `point`, with its distance.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` if the point or an endpoint is
/// not finite.
pub fn closest_point_on_edge(point: &Point2, edge: &Edge) -> Result<ClosestPointResult> {
    ensure_finite(point, "query point")?;
    ensure_finite(&edge.a, "edge start")?;
    ensure_finite(&edge.b, "edge end")?;
    let closest = closest_point_on_segment(point, &edge.a, &edge.b);
    Ok(ClosestPointResult {
        point: closest,
        distance: (point - closest).norm(),
    })
}

/// `true` when `point` is strictly closer than `threshold` to `edge`.
///
/// The threshold is a caller tuning value (e.g. 16 units for portal pickup).
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` for non-finite inputs or a
/// negative threshold.
pub fn is_near_edge(point: &Point2, edge: &Edge, threshold: f64) -> Result<bool> {
    ensure_non_negative(threshold, "proximity threshold")?;
    Ok(distance_to_segment(point, edge)? < threshold)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn edge() -> Edge {
        Edge::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))
    }

    #[test]
    fn perpendicular_distance() {
        assert_relative_eq!(distance_to_segment(&Point2::new(5.0, 3.0), &edge()).unwrap(), 3.0);
    }

    #[test]
    fn clamped_to_endpoints() {
        assert_relative_eq!(distance_to_segment(&Point2::new(-5.0, 0.0), &edge()).unwrap(), 5.0);
        assert_relative_eq!(distance_to_segment(&Point2::new(15.0, 0.0), &edge()).unwrap(), 5.0);
    }

    #[test]
    fn closest_point_reports_foot() {
        let r = closest_point_on_edge(&Point2::new(4.0, -2.0), &edge()).unwrap();
        assert_relative_eq!(r.point, Point2::new(4.0, 0.0));
        assert_relative_eq!(r.distance, 2.0);
    }

    #[test]
    fn proximity_is_strict() {
        assert!(is_near_edge(&Point2::new(5.0, 15.9), &edge(), 16.0).unwrap());
        assert!(!is_near_edge(&Point2::new(5.0, 16.0), &edge(), 16.0).unwrap());
        assert!(is_near_edge(&Point2::new(5.0, 0.0), &edge(), -1.0).is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(distance_to_segment(&Point2::new(f64::NAN, 0.0), &edge())
            .is_err_and(|e| e.is_invalid_argument()));
        let bad = Edge::new(Point2::new(0.0, f64::INFINITY), Point2::new(1.0, 0.0));
        assert!(distance_to_segment(&Point2::new(0.0, 0.0), &bad).is_err());
    }
}
