use crate::error::{GeometryError, Result};
use crate::geometry::{Edge, Polygon};
use crate::math::{ensure_finite, ensure_positive, Point2};

/// Angular offset of vertex 0. Puts vertex 0 at the top on a y-down screen;
/// edge numbering ("edge 2 is the descend edge") depends on it.
const START_ANGLE_DEG: f64 = -90.0;

/// Angular step between consecutive vertices.
const STEP_DEG: f64 = 72.0;

/// Builds a regular pentagon and its 5 edges.
///
/// Vertex `i` sits at angle `rotation − 90° + i·72°` on the circumcircle,
/// counter-clockwise in angle space (clockwise on a y-down screen).
pub struct BuildPentagon {
    center: Point2,
    radius: f64,
    rotation_deg: f64,
}

impl BuildPentagon {
    /// Creates a new `BuildPentagon` operation with zero rotation.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            rotation_deg: 0.0,
        }
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn with_rotation_deg(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    /// Executes the construction, returning the polygon and its edges.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if the radius is not positive
    /// or any input is not finite.
    pub fn execute(&self) -> Result<(Polygon, [Edge; 5])> {
        ensure_positive(self.radius, "pentagon radius")?;
        ensure_finite(&self.center, "pentagon center")?;
        if !self.rotation_deg.is_finite() {
            return Err(GeometryError::InvalidArgument(format!(
                "pentagon rotation must be finite, got {}",
                self.rotation_deg
            ))
            .into());
        }

        let vertices: [Point2; 5] = std::array::from_fn(|i| {
            #[allow(clippy::cast_precision_loss)]
            let step = i as f64;
            let (sin, cos) = (self.rotation_deg + START_ANGLE_DEG + step * STEP_DEG)
                .to_radians()
                .sin_cos();
            Point2::new(self.center.x + cos * self.radius, self.center.y + sin * self.radius)
        });
        let edges: [Edge; 5] =
            std::array::from_fn(|i| Edge::new(vertices[i], vertices[(i + 1) % 5]));

        tracing::trace!(
            cx = self.center.x,
            cy = self.center.y,
            radius = self.radius,
            rotation_deg = self.rotation_deg,
            "pentagon built"
        );

        Ok((Polygon::new(vertices.to_vec())?, edges))
    }
}
