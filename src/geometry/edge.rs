use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A straight polygon edge between two consecutive vertices.
///
/// Edges are derived data: they are recomputed whenever the owning polygon is
/// rebuilt and carry no identity of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start vertex (vertex `i`).
    pub a: Point2,
    /// End vertex (vertex `(i + 1) mod n`).
    pub b: Point2,
}

impl Edge {
    /// Creates an edge from its two endpoints.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Midpoint of the edge.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.a, &self.b)
    }

    /// Euclidean length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Unit direction from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a zero-length edge.
    pub fn direction(&self) -> Result<Vector2> {
        let d = self.b - self.a;
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    /// Outward unit normal, assuming the polygon winds clockwise on a y-down
    /// screen (the winding produced by the pentagon builder).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a zero-length edge.
    pub fn outward_normal(&self) -> Result<Vector2> {
        let d = self.direction()?;
        Ok(Vector2::new(d.y, -d.x))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn midpoint_and_length() {
        let e = Edge::new(Point2::new(0.0, 0.0), Point2::new(6.0, 8.0));
        assert_relative_eq!(e.midpoint(), Point2::new(3.0, 4.0));
        assert_relative_eq!(e.length(), 10.0);
    }

    #[test]
    fn direction_is_unit() {
        let e = Edge::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        let d = e.direction().unwrap();
        assert_relative_eq!(d, Vector2::new(0.6, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn outward_normal_points_away_on_y_down_screen() {
        // Top edge of a screen-clockwise square runs left to right; outward is up (-y).
        let e = Edge::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let n = e.outward_normal().unwrap();
        assert_relative_eq!(n, Vector2::new(0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_length_edge_has_no_direction() {
        let e = Edge::new(Point2::new(2.0, 2.0), Point2::new(2.0, 2.0));
        assert!(e.direction().is_err());
        assert!(e.outward_normal().is_err());
    }
}
