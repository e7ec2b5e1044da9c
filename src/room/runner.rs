use crate::error::Result;
use crate::geometry::{Bounds2, Polygon};
use crate::math::{ensure_finite, Point2, Vector2};
use crate::operations::movement::{MovementClamp, TravelEdges};
use crate::operations::projection::ProjectNeighbors;
use crate::operations::query::is_near_edge;
use crate::topology::Face;

use super::{FaceDefinition, FaceKey, RoomConfig};

/// What happened on one movement tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomTick {
    /// Position after clamping to the face.
    pub position: Point2,
    /// `true` if the candidate left the face and was snapped back.
    pub rejected: bool,
    /// Target of the travel trigger the mover stands in, if any.
    pub travel: Option<FaceKey>,
    /// First travel edge within the proximity threshold, if any.
    pub near_edge: Option<usize>,
}

/// The geometry of one entered face: built once on entry, discarded on exit.
#[derive(Debug, Clone)]
pub struct Room {
    key: FaceKey,
    face: Face,
    neighbors: [Polygon; 5],
    world_bounds: Bounds2,
    clamp: MovementClamp,
    travel: TravelEdges<FaceKey>,
    targets: [Option<FaceKey>; 5],
    proximity_threshold: f64,
    active_travel: Option<FaceKey>,
}

impl Room {
    /// Enters the face described by `definition`, centered at `center`.
    ///
    /// Without an explicit `spawn` the mover starts `spawn_lift` above the
    /// center. A spawn outside the face falls back to the lifted centroid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for invalid definition or
    /// config values and `GeometryError::NumericDegeneracy` for a camera
    /// distance that cannot clear the folded neighbors.
    pub fn enter(
        definition: &FaceDefinition,
        center: Point2,
        spawn: Option<Point2>,
        config: &RoomConfig,
    ) -> Result<Self> {
        config.validate()?;
        let face = Face::new(center, definition.radius, 0.0)?;
        let neighbors = ProjectNeighbors::new()
            .with_config(config.projection)
            .execute_face(&face)?;

        let world_bounds = neighbors
            .iter()
            .fold(face.polygon().bounds(), |acc, n| acc.union(&n.bounds()));

        let spawn = spawn.unwrap_or_else(|| center - Vector2::new(0.0, config.spawn_lift));
        let clamp = MovementClamp::new(face.polygon().clone(), &spawn, config.spawn_lift)?;
        let travel = TravelEdges::new(
            &face,
            definition.neighbors,
            definition.edge_trigger_scale,
            config.trigger_depth,
        )?;

        tracing::debug!(
            face = %definition.key,
            radius = definition.radius,
            travel_edges = travel.len(),
            spawn_x = clamp.last_safe().x,
            spawn_y = clamp.last_safe().y,
            "entered face"
        );

        Ok(Self {
            key: definition.key,
            face,
            neighbors,
            world_bounds,
            clamp,
            travel,
            targets: definition.neighbors,
            proximity_threshold: config.proximity_threshold,
            active_travel: None,
        })
    }

    /// Key of this room's face.
    #[must_use]
    pub fn key(&self) -> FaceKey {
        self.key
    }

    /// The central face, authoritative for containment.
    #[must_use]
    pub fn face(&self) -> &Face {
        &self.face
    }

    /// The 5 projected neighbor polygons (decorative only).
    #[must_use]
    pub fn neighbors(&self) -> &[Polygon; 5] {
        &self.neighbors
    }

    /// Union of the central and neighbor polygon bounds.
    #[must_use]
    pub fn world_bounds(&self) -> Bounds2 {
        self.world_bounds
    }

    /// Travel triggers of this room.
    #[must_use]
    pub fn travel_edges(&self) -> &TravelEdges<FaceKey> {
        &self.travel
    }

    /// Current mover position.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.clamp.last_safe()
    }

    /// Travel target currently available, as of the last tick.
    #[must_use]
    pub fn active_travel(&self) -> Option<FaceKey> {
        self.active_travel
    }

    /// Advances the mover towards `candidate`, clamping to the face, and
    /// reports which travel edge (if any) is in reach.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `candidate` is not finite.
    pub fn tick(&mut self, candidate: &Point2) -> Result<RoomTick> {
        ensure_finite(candidate, "movement candidate")?;
        let outcome = self.clamp.step(candidate)?;
        let travel = self.travel.active_target(&outcome.position)?.copied();

        let mut near_edge = None;
        for (i, edge) in self.face.edges().iter().enumerate() {
            if self.targets[i].is_some()
                && is_near_edge(&outcome.position, edge, self.proximity_threshold)?
            {
                near_edge = Some(i);
                break;
            }
        }

        if travel != self.active_travel {
            match travel {
                Some(target) => {
                    tracing::debug!(face = %self.key, target = %target, "travel edge active");
                }
                None => tracing::trace!(face = %self.key, "travel edge left"),
            }
            self.active_travel = travel;
        }

        Ok(RoomTick {
            position: outcome.position,
            rejected: outcome.rejected,
            travel,
            near_edge,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::projection::ProjectionConfig;
    use crate::room::Atlas;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn room(key: u8) -> Room {
        init_tracing();
        let atlas = Atlas::dodecahedron();
        let def = atlas.get(FaceKey(key)).unwrap();
        Room::enter(def, Point2::new(400.0, 300.0), None, &RoomConfig::default()).unwrap()
    }

    #[test]
    fn enter_builds_face_and_neighbors() {
        let r = room(1);
        assert_eq!(r.key(), FaceKey(1));
        assert_relative_eq!(r.face().radius(), 180.0);
        assert_eq!(r.neighbors().len(), 5);
        assert_eq!(r.travel_edges().len(), 5);
        assert_relative_eq!(r.position(), Point2::new(400.0, 280.0));
        assert!(r.active_travel().is_none());
    }

    #[test]
    fn world_bounds_cover_face_and_neighbors() {
        let r = room(2);
        let b = r.world_bounds();
        for v in r.face().polygon().vertices() {
            assert!(b.contains(v));
        }
        for n in r.neighbors() {
            for v in n.vertices() {
                assert!(b.contains(v));
            }
        }
        assert!(b.width() > 2.0 * 180.0);
    }

    #[test]
    fn leaving_the_face_is_rejected() {
        let mut r = room(1);
        let t = r.tick(&Point2::new(410.0, 300.0)).unwrap();
        assert!(!t.rejected);
        let t = r.tick(&Point2::new(900.0, 300.0)).unwrap();
        assert!(t.rejected);
        assert_eq!(t.position, Point2::new(410.0, 300.0));
    }

    #[test]
    fn standing_on_an_edge_midpoint_offers_travel() {
        let mut r = room(3);
        // Face 3 leads to Face 9 across edge 2 (the bottom edge).
        let mid = r.face().edges()[2].midpoint();
        let inside = mid - Vector2::new(0.0, 2.0);
        let t = r.tick(&inside).unwrap();
        assert!(!t.rejected);
        assert_eq!(t.travel, Some(FaceKey(9)));
        assert_eq!(t.near_edge, Some(2));
        assert_eq!(r.active_travel(), Some(FaceKey(9)));

        let center = r.face().center();
        let t = r.tick(&center).unwrap();
        assert_eq!(t.travel, None);
        assert_eq!(t.near_edge, None);
        assert_eq!(r.active_travel(), None);
    }

    #[test]
    fn edges_without_targets_never_trigger() {
        init_tracing();
        let def = FaceDefinition::new(FaceKey(1), [None, None, Some(FaceKey(2)), None, None]);
        let mut r = Room::enter(&def, Point2::new(0.0, 0.0), None, &RoomConfig::default()).unwrap();
        let mid = r.face().edges()[0].midpoint();
        let inside = mid + (r.face().center() - mid) * 0.01;
        let t = r.tick(&inside).unwrap();
        assert_eq!(t.travel, None);
        assert_eq!(t.near_edge, None);
    }

    #[test]
    fn spawn_outside_falls_back() {
        init_tracing();
        let atlas = Atlas::dodecahedron();
        let def = atlas.get(FaceKey(5)).unwrap();
        let r = Room::enter(
            def,
            Point2::new(0.0, 0.0),
            Some(Point2::new(1000.0, 0.0)),
            &RoomConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(r.position(), Point2::new(0.0, -20.0), epsilon = 1e-9);
    }

    #[test]
    fn misconfigured_camera_fails_entry() {
        init_tracing();
        let atlas = Atlas::dodecahedron();
        let def = atlas.get(FaceKey(1)).unwrap();
        let config = RoomConfig::default().with_projection(
            ProjectionConfig::default()
                .with_dihedral_deg(-116.565_051)
                .with_camera_distance(100.0),
        );
        let err = Room::enter(def, Point2::new(0.0, 0.0), None, &config).unwrap_err();
        assert!(err.is_numeric_degeneracy());
    }

    #[test]
    fn non_finite_candidate_is_rejected() {
        let mut r = room(1);
        assert!(r.tick(&Point2::new(f64::NAN, 1.0)).is_err_and(|e| e.is_invalid_argument()));
    }
}
