use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::{ensure_finite, Point2, Vector2};

/// Returns `spawn` if it lies inside `polygon`, otherwise the polygon's
/// vertex centroid shifted up (towards `-y`) by `lift`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` for a non-finite spawn or lift.
pub fn clamp_spawn(spawn: &Point2, polygon: &Polygon, lift: f64) -> Result<Point2> {
    ensure_finite(spawn, "spawn point")?;
    if !lift.is_finite() {
        return Err(GeometryError::InvalidArgument(format!(
            "spawn lift must be finite, got {lift}"
        ))
        .into());
    }
    if polygon.contains(spawn) {
        return Ok(*spawn);
    }
    let fallback = polygon.centroid() - Vector2::new(0.0, lift);
    tracing::debug!(
        x = spawn.x,
        y = spawn.y,
        fallback_x = fallback.x,
        fallback_y = fallback.y,
        "spawn outside face, using fallback"
    );
    Ok(fallback)
}

/// Outcome of one movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Where the mover ends up this tick.
    pub position: Point2,
    /// `true` if the candidate left the polygon and was snapped back.
    pub rejected: bool,
}

/// Keeps a mover inside a polygon by remembering its last contained position.
#[derive(Debug, Clone)]
pub struct MovementClamp {
    polygon: Polygon,
    last_safe: Point2,
}

impl MovementClamp {
    /// Creates a clamp starting from `spawn`, which is first passed through
    /// [`clamp_spawn`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for non-finite inputs.
    pub fn new(polygon: Polygon, spawn: &Point2, lift: f64) -> Result<Self> {
        let last_safe = clamp_spawn(spawn, &polygon, lift)?;
        Ok(Self { polygon, last_safe })
    }

    /// The most recent accepted position.
    #[must_use]
    pub fn last_safe(&self) -> Point2 {
        self.last_safe
    }

    /// The polygon movement is clamped to.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Accepts `candidate` if it is inside the polygon, otherwise returns the
    /// last safe position.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `candidate` is not finite.
    pub fn step(&mut self, candidate: &Point2) -> Result<MoveOutcome> {
        ensure_finite(candidate, "movement candidate")?;
        if self.polygon.contains(candidate) {
            self.last_safe = *candidate;
            return Ok(MoveOutcome {
                position: *candidate,
                rejected: false,
            });
        }
        tracing::trace!(x = candidate.x, y = candidate.y, "movement rejected");
        Ok(MoveOutcome {
            position: self.last_safe,
            rejected: true,
        })
    }
}
