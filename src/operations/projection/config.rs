use crate::error::{GeometryError, Result};
use crate::math::ensure_positive;

/// Interior face-to-face angle of a regular dodecahedron, in degrees.
pub const DODECAHEDRON_DIHEDRAL_DEG: f64 = 116.565_051;

/// Default camera distance on the `+Z` axis.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 1800.0;

/// Parameters of the perspective neighbor preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Dihedral angle in degrees. Neighbors are rotated by its negation so
    /// they fold away from the viewer (into negative depth).
    pub dihedral_deg: f64,
    /// Camera position on the `+Z` axis, looking at the `z = 0` plane.
    pub camera_distance: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            dihedral_deg: DODECAHEDRON_DIHEDRAL_DEG,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl ProjectionConfig {
    /// Sets the dihedral angle in degrees.
    #[must_use]
    pub fn with_dihedral_deg(mut self, dihedral_deg: f64) -> Self {
        self.dihedral_deg = dihedral_deg;
        self
    }

    /// Sets the camera distance.
    #[must_use]
    pub fn with_camera_distance(mut self, camera_distance: f64) -> Self {
        self.camera_distance = camera_distance;
        self
    }

    /// Rotation applied about each shared edge, in radians (`-dihedral`).
    #[must_use]
    pub fn tilt_rad(&self) -> f64 {
        -self.dihedral_deg.to_radians()
    }

    /// Checks that the camera distance is positive and the angle finite.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` otherwise.
    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.camera_distance, "camera distance")?;
        if !self.dihedral_deg.is_finite() {
            return Err(GeometryError::InvalidArgument(format!(
                "dihedral angle must be finite, got {}",
                self.dihedral_deg
            ))
            .into());
        }
        Ok(())
    }
}
