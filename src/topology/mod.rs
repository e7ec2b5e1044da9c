pub mod face;

pub use face::{Face, FaceId};

use crate::error::{Result, TopologyError};
use crate::geometry::Bounds2;
use crate::math::Point2;
use crate::operations::query::locate_face;
use slotmap::SlotMap;

/// A face stored in a [`FaceNet`], with its declared label and edge links.
#[derive(Debug, Clone)]
pub struct NetFace {
    /// Caller-facing label (e.g. `1..=12` for a dodecahedron net).
    pub label: u32,
    /// The face geometry.
    pub face: Face,
    /// Neighbor across edge `i`, if linked.
    pub neighbors: [Option<FaceId>; 5],
}

/// Arena owning the faces of an unfolded net.
///
/// Faces are addressed by typed generational ids and iterated in declaration
/// order, which is the order [`FaceNet::locate`] scans.
#[derive(Debug, Default)]
pub struct FaceNet {
    faces: SlotMap<FaceId, NetFace>,
    order: Vec<FaceId>,
}

impl FaceNet {
    /// Creates a new, empty net.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a face and returns its ID.
    pub fn add_face(&mut self, label: u32, face: Face) -> FaceId {
        let id = self.faces.insert(NetFace {
            label,
            face,
            neighbors: [None; 5],
        });
        self.order.push(id);
        id
    }

    /// Returns the stored face, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the net.
    pub fn face(&self, id: FaceId) -> std::result::Result<&NetFace, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Looks a face up by its declared label.
    #[must_use]
    pub fn find_by_label(&self, label: u32) -> Option<FaceId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.faces.get(*id).is_some_and(|f| f.label == label))
    }

    /// Records that edge `edge_a` of `a` is shared with edge `edge_b` of `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if either face is missing or an edge index is not in
    /// `0..5`.
    pub fn link(
        &mut self,
        a: FaceId,
        edge_a: usize,
        b: FaceId,
        edge_b: usize,
    ) -> std::result::Result<(), TopologyError> {
        if edge_a >= 5 || edge_b >= 5 {
            return Err(TopologyError::InvalidTopology(format!(
                "edge index out of range: {edge_a}, {edge_b}"
            )));
        }
        if !self.faces.contains_key(b) {
            return Err(TopologyError::EntityNotFound("face".into()));
        }
        self.faces
            .get_mut(a)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))?
            .neighbors[edge_a] = Some(b);
        if let Some(fb) = self.faces.get_mut(b) {
            fb.neighbors[edge_b] = Some(a);
        }
        Ok(())
    }

    /// Neighbor of `id` across edge `edge`, if linked.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or the edge index is not in
    /// `0..5`.
    pub fn neighbor(
        &self,
        id: FaceId,
        edge: usize,
    ) -> std::result::Result<Option<FaceId>, TopologyError> {
        let f = self.face(id)?;
        f.neighbors.get(edge).copied().ok_or_else(|| {
            TopologyError::InvalidTopology(format!("edge index {edge} out of range"))
        })
    }

    /// Faces in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &NetFace)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.faces.get(*id).map(|f| (*id, f)))
    }

    /// Number of faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the net holds no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// First face (in declaration order) whose polygon contains `point`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `point` is not finite.
    pub fn locate(&self, point: &Point2) -> Result<Option<FaceId>> {
        locate_face(point, self.iter().map(|(id, f)| (id, &f.face)))
    }

    /// Bounding rectangle of every face vertex, or `None` for an empty net.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds2> {
        self.iter()
            .map(|(_, f)| f.face.polygon().bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn face_at(x: f64, y: f64) -> Face {
        Face::new(Point2::new(x, y), 10.0, 0.0).unwrap()
    }

    #[test]
    fn add_and_lookup() {
        let mut net = FaceNet::new();
        let a = net.add_face(1, face_at(0.0, 0.0));
        let b = net.add_face(2, face_at(100.0, 0.0));
        assert_eq!(net.len(), 2);
        assert!(!net.is_empty());
        assert_eq!(net.face(a).unwrap().label, 1);
        assert_eq!(net.find_by_label(2), Some(b));
        assert_eq!(net.find_by_label(3), None);
    }

    #[test]
    fn link_is_bidirectional() {
        let mut net = FaceNet::new();
        let a = net.add_face(1, face_at(0.0, 0.0));
        let b = net.add_face(2, face_at(100.0, 0.0));
        net.link(a, 1, b, 3).unwrap();
        assert_eq!(net.neighbor(a, 1).unwrap(), Some(b));
        assert_eq!(net.neighbor(b, 3).unwrap(), Some(a));
        assert_eq!(net.neighbor(a, 0).unwrap(), None);
    }

    #[test]
    fn link_rejects_bad_edge_index() {
        let mut net = FaceNet::new();
        let a = net.add_face(1, face_at(0.0, 0.0));
        let b = net.add_face(2, face_at(100.0, 0.0));
        assert!(matches!(net.link(a, 5, b, 0), Err(TopologyError::InvalidTopology(_))));
        assert!(net.neighbor(a, 7).is_err());
    }

    #[test]
    fn locate_scans_in_declaration_order() {
        let mut net = FaceNet::new();
        let a = net.add_face(1, face_at(0.0, 0.0));
        let b = net.add_face(2, face_at(100.0, 0.0));
        // Overlapping duplicate of `a`, declared last.
        let _c = net.add_face(3, face_at(0.0, 0.0));
        assert_eq!(net.locate(&Point2::new(0.0, 0.0)).unwrap(), Some(a));
        assert_eq!(net.locate(&Point2::new(100.0, 0.0)).unwrap(), Some(b));
        assert_eq!(net.locate(&Point2::new(50.0, 0.0)).unwrap(), None);
    }

    #[test]
    fn bounds_cover_all_faces() {
        let mut net = FaceNet::new();
        assert!(net.bounds().is_none());
        net.add_face(1, face_at(0.0, 0.0));
        net.add_face(2, face_at(100.0, 0.0));
        let b = net.bounds().unwrap();
        assert!(b.min.x < 0.0 && b.max.x > 100.0);
    }
}
