use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{crossing_number_contains, signed_area, vertex_centroid};
use crate::math::{ensure_finite, Point2};

use super::{Bounds2, Edge};

/// A closed polygon in the view plane.
///
/// Insertion order is winding order; the last vertex connects back to the
/// first. Immutable once built: transforms produce new polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex list.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for fewer than 3 vertices or
    /// any non-finite coordinate.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidArgument(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        for v in &vertices {
            ensure_finite(v, "polygon vertex")?;
        }
        Ok(Self { vertices })
    }

    /// The vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices (always at least 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge `i` connects vertex `i` to vertex `(i + 1) mod n`.
    #[must_use]
    pub fn edge(&self, i: usize) -> Option<Edge> {
        let n = self.vertices.len();
        if i >= n {
            return None;
        }
        Some(Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// All edges in order, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertices.len()).filter_map(|i| self.edge(i))
    }

    /// Crossing-number containment. The caller is responsible for `point`
    /// being finite; see [`crate::operations::query::point_in_polygon`] for
    /// the checked form.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        crossing_number_contains(point, &self.vertices)
    }

    /// Vertex average ("center-ish" point).
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        vertex_centroid(&self.vertices)
    }

    /// Shoelace signed area (positive when counter-clockwise in a y-up frame).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Axis-aligned bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Bounds2 {
        let first = self.vertices[0];
        Bounds2::from_points(&self.vertices).unwrap_or(Bounds2 { min: first, max: first })
    }
}
