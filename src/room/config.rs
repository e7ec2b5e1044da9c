use crate::error::Result;
use crate::math::{ensure_non_negative, ensure_positive};
use crate::operations::projection::ProjectionConfig;

/// Gameplay tuning for a room. Everything here is a caller choice, not part
/// of the geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomConfig {
    /// A mover closer than this to a travel edge counts as near it.
    pub proximity_threshold: f64,
    /// Unscaled depth of an edge trigger box across its edge.
    pub trigger_depth: f64,
    /// How far above the centroid a rejected spawn is placed.
    pub spawn_lift: f64,
    /// Perspective preview parameters.
    pub projection: ProjectionConfig,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 16.0,
            trigger_depth: 40.0,
            spawn_lift: 20.0,
            projection: ProjectionConfig::default(),
        }
    }
}

impl RoomConfig {
    /// Sets the proximity threshold.
    #[must_use]
    pub fn with_proximity_threshold(mut self, threshold: f64) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    /// Sets the trigger depth.
    #[must_use]
    pub fn with_trigger_depth(mut self, depth: f64) -> Self {
        self.trigger_depth = depth;
        self
    }

    /// Sets the spawn lift.
    #[must_use]
    pub fn with_spawn_lift(mut self, lift: f64) -> Self {
        self.spawn_lift = lift;
        self
    }

    /// Sets the projection parameters.
    #[must_use]
    pub fn with_projection(mut self, projection: ProjectionConfig) -> Self {
        self.projection = projection;
        self
    }

    /// Checks every value.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for a negative threshold or
    /// lift, a non-positive depth, or an invalid projection.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative(self.proximity_threshold, "proximity threshold")?;
        ensure_positive(self.trigger_depth, "trigger depth")?;
        ensure_non_negative(self.spawn_lift, "spawn lift")?;
        self.projection.validate()
    }
}
