use crate::error::{Result, TopologyError};
use crate::geometry::Bounds2;
use crate::math::Point2;
use crate::topology::{Face, FaceId, FaceNet};

/// Padding added around the net's vertex bounds.
const NET_BOUNDS_PAD: f64 = 60.0;

/// A 12-face unfolded layout together with its padded bounds.
#[derive(Debug)]
pub struct DodecaNet {
    /// The faces, labelled `1..=12` in declaration order.
    pub net: FaceNet,
    /// Vertex bounds of all faces, padded by 60 units on each side.
    pub bounds: Bounds2,
}

/// Lays out a flat 12-face net of regular pentagons.
///
/// Face 1 sits at the center. Faces 2..=6 attach to its edges 0..4, faces
/// 7..=11 attach to edge `(i + 2) mod 5` of petal `i`, and face 12 hangs off
/// edge 0 of petal 2. Every attached face is the mirror image of its base
/// across the shared edge, so shared edges keep the same index on both sides.
///
/// This is a flat roaming layout, distinct from the perspective neighbor
/// preview of [`ProjectNeighbors`](crate::operations::projection::ProjectNeighbors).
pub struct MakeDodecaNet {
    center: Point2,
    radius: f64,
}

impl MakeDodecaNet {
    /// Creates a new `MakeDodecaNet` operation.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for a non-positive radius or
    /// non-finite center.
    pub fn execute(&self) -> Result<DodecaNet> {
        let mut net = FaceNet::new();
        let root = net.add_face(1, Face::new(self.center, self.radius, 0.0)?);

        let mut petals = Vec::with_capacity(5);
        for (edge, label) in (0..5).zip(2..) {
            petals.push(attach(&mut net, root, edge, label)?);
        }
        for (i, (&petal, label)) in petals.iter().zip(7..).enumerate() {
            attach(&mut net, petal, (i + 2) % 5, label)?;
        }
        attach(&mut net, petals[2], 0, 12)?;

        let bounds = net
            .bounds()
            .ok_or_else(|| TopologyError::InvalidTopology("empty net".into()))?
            .padded(NET_BOUNDS_PAD);

        tracing::debug!(
            faces = net.len(),
            radius = self.radius,
            min_x = bounds.min.x,
            min_y = bounds.min.y,
            max_x = bounds.max.x,
            max_y = bounds.max.y,
            "dodecahedron net laid out"
        );

        Ok(DodecaNet { net, bounds })
    }
}

/// Attaches a new face across `edge` of `base` and links the pair.
///
/// The new center lies two apothems out along the edge's outward normal and
/// the face is turned by 180°, which mirrors a regular pentagon across the edge.
fn attach(net: &mut FaceNet, base: FaceId, edge: usize, label: u32) -> Result<FaceId> {
    let base_face = net.face(base)?.face.clone();
    let shared = base_face.edges()[edge];
    let normal = shared.outward_normal()?;
    let center = base_face.center() + normal * (2.0 * base_face.apothem());
    let rotation = (base_face.rotation_deg() + 180.0).rem_euclid(360.0);

    let id = net.add_face(label, Face::new(center, base_face.radius(), rotation)?);
    net.link(base, edge, id, edge)?;
    Ok(id)
}
