use crate::error::Result;
use crate::geometry::{Edge, Polygon};
use crate::math::Point2;
use crate::operations::creation::BuildPentagon;

slotmap::new_key_type! {
    /// Unique identifier for a face in a [`FaceNet`](super::FaceNet).
    pub struct FaceId;
}

/// One regular pentagonal face of the modeled dodecahedron.
///
/// The polygon is always generated fresh from `(center, radius, rotation)`;
/// a face is never edited in place. Only this polygon is authoritative for
/// containment and collision.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    center: Point2,
    radius: f64,
    rotation_deg: f64,
    polygon: Polygon,
    edges: [Edge; 5],
}

impl Face {
    /// Builds the regular pentagon face for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for a non-positive radius or
    /// non-finite inputs.
    pub fn new(center: Point2, radius: f64, rotation_deg: f64) -> Result<Self> {
        let (polygon, edges) = BuildPentagon::new(center, radius)
            .with_rotation_deg(rotation_deg)
            .execute()?;
        Ok(Self {
            center,
            radius,
            rotation_deg,
            polygon,
            edges,
        })
    }

    /// Center of the circumscribed circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Circumradius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rotation in degrees that was applied on construction.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// The central polygon (5 vertices).
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// The 5 edges; edge `i` joins vertex `i` to vertex `(i + 1) mod 5`.
    #[must_use]
    pub fn edges(&self) -> &[Edge; 5] {
        &self.edges
    }

    /// Apothem: distance from the center to each edge midpoint.
    #[must_use]
    pub fn apothem(&self) -> f64 {
        self.radius * 36f64.to_radians().cos()
    }

    /// Returns a copy of this face moved so its center sits at `center`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `center` is not finite.
    pub fn recentered(&self, center: Point2) -> Result<Self> {
        Self::new(center, self.radius, self.rotation_deg)
    }
}
