use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::{ensure_finite, Point2};

/// Crossing-number containment of `point` in `polygon`.
///
/// Works for convex and concave polygons. Points exactly level with a
/// horizontal edge are handled without special cases.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` if `point` is not finite. The
/// polygon is already validated by construction.
pub fn point_in_polygon(point: &Point2, polygon: &Polygon) -> Result<bool> {
    ensure_finite(point, "query point")?;
    Ok(polygon.contains(point))
}
