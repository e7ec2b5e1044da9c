use crate::error::Result;
use crate::math::{ensure_finite, ensure_positive, Point2, Vector2};
use crate::topology::Face;

/// An oriented trigger box laid along one face edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTrigger {
    /// Index of the edge this trigger sits on.
    pub edge: usize,
    /// Box center (the edge midpoint).
    pub center: Point2,
    /// Unit vector along the edge.
    pub axis: Vector2,
    /// Half extent along the edge.
    pub half_width: f64,
    /// Half extent across the edge.
    pub half_depth: f64,
}

impl EdgeTrigger {
    /// Inclusive containment in the box's own frame.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        let d = point - self.center;
        let along = d.dot(&self.axis);
        let across = d.perp(&self.axis);
        along.abs() <= self.half_width && across.abs() <= self.half_depth
    }
}

/// Travel triggers for the edges of one face that lead somewhere.
///
/// Each trigger is centered on its edge midpoint, `length·scale` wide along
/// the edge and `depth·scale` deep across it.
#[derive(Debug, Clone)]
pub struct TravelEdges<T> {
    triggers: Vec<(EdgeTrigger, T)>,
}

impl<T> TravelEdges<T> {
    /// Builds triggers for every edge with a `Some` target.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for a non-positive scale or
    /// depth, and `GeometryError::ZeroVector` for a zero-length edge.
    pub fn new(face: &Face, targets: [Option<T>; 5], scale: f64, depth: f64) -> Result<Self> {
        ensure_positive(scale, "edge trigger scale")?;
        ensure_positive(depth, "edge trigger depth")?;

        let mut triggers = Vec::new();
        for (i, (edge, target)) in face.edges().iter().zip(targets).enumerate() {
            let Some(target) = target else { continue };
            let trigger = EdgeTrigger {
                edge: i,
                center: edge.midpoint(),
                axis: edge.direction()?,
                half_width: edge.length() * scale * 0.5,
                half_depth: depth * scale * 0.5,
            };
            triggers.push((trigger, target));
        }
        Ok(Self { triggers })
    }

    /// The trigger boxes with their targets, in edge order.
    #[must_use]
    pub fn triggers(&self) -> &[(EdgeTrigger, T)] {
        &self.triggers
    }

    /// First trigger (in edge order) containing `point`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `point` is not finite.
    pub fn active(&self, point: &Point2) -> Result<Option<(&EdgeTrigger, &T)>> {
        ensure_finite(point, "travel query point")?;
        Ok(self
            .triggers
            .iter()
            .find(|(trigger, _)| trigger.contains(point))
            .map(|(trigger, target)| (trigger, target)))
    }

    /// Target of the first trigger containing `point`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `point` is not finite.
    pub fn active_target(&self, point: &Point2) -> Result<Option<&T>> {
        Ok(self.active(point)?.map(|(_, target)| target))
    }

    /// Number of edges that carry a trigger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Returns `true` if no edge leads anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
