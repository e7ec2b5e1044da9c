use crate::error::{GeometryError, Result};
use crate::geometry::{Edge, Polygon};
use crate::math::rotation_3d::{perspective_project, rotate_about_axis};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::Face;

use super::ProjectionConfig;

/// Computes the 5 neighbor polygons of a face as seen by a fixed perspective
/// camera.
///
/// For each edge `i` the whole face is lifted to `z = 0`, rotated about edge
/// `i` by `-dihedral` (so it folds away from the viewer) and projected back
/// onto the view plane. The central face itself is never reprojected.
pub struct ProjectNeighbors {
    config: ProjectionConfig,
}

impl Default for ProjectNeighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectNeighbors {
    /// Creates a new `ProjectNeighbors` operation with the dodecahedron defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProjectionConfig::default(),
        }
    }

    /// Sets a custom projection configuration.
    #[must_use]
    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Projects the neighbors of `face` across each of its `edges`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` for an invalid configuration,
    /// a face without exactly 5 vertices, or an edge that does not join
    /// vertex `i` to vertex `(i + 1) mod 5` of `face`.
    /// Returns `GeometryError::ZeroVector` for a zero-length edge and
    /// `GeometryError::NumericDegeneracy` if a rotated vertex reaches the
    /// camera plane (a misconfigured camera distance).
    pub fn execute(&self, face: &Polygon, edges: &[Edge; 5]) -> Result<[Polygon; 5]> {
        self.config.validate()?;
        check_edges(face, edges)?;
        let tilt = self.config.tilt_rad();

        let [n0, n1, n2, n3, n4] =
            std::array::from_fn(|i| self.project_across(face, i, &edges[i], tilt));
        let neighbors = [n0?, n1?, n2?, n3?, n4?];

        tracing::trace!(
            dihedral_deg = self.config.dihedral_deg,
            camera_distance = self.config.camera_distance,
            "neighbors projected"
        );

        Ok(neighbors)
    }

    /// Convenience form of [`execute`](Self::execute) for a built [`Face`].
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn execute_face(&self, face: &Face) -> Result<[Polygon; 5]> {
        self.execute(face.polygon(), face.edges())
    }

    /// Folds `face` about `edge` (edge number `index`) and projects it.
    fn project_across(
        &self,
        face: &Polygon,
        index: usize,
        edge: &Edge,
        tilt: f64,
    ) -> Result<Polygon> {
        let folded = fold_about_edge(face, edge, tilt)?;
        let projected = folded
            .iter()
            .map(|p| perspective_project(p, self.config.camera_distance))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                if e.is_numeric_degeneracy() {
                    GeometryError::NumericDegeneracy(format!(
                        "neighbor {index}: camera distance {} does not clear the folded face",
                        self.config.camera_distance
                    ))
                    .into()
                } else {
                    e
                }
            })?;
        Polygon::new(projected)
    }
}

/// Checks that `face` is a pentagon and `edges[i]` runs from its vertex `i`
/// to vertex `(i + 1) mod 5`.
fn check_edges(face: &Polygon, edges: &[Edge; 5]) -> Result<()> {
    let vertices = face.vertices();
    if vertices.len() != 5 {
        return Err(GeometryError::InvalidArgument(format!(
            "face must have 5 vertices, got {}",
            vertices.len()
        ))
        .into());
    }
    for (i, edge) in edges.iter().enumerate() {
        let j = (i + 1) % 5;
        let joined = (edge.a - vertices[i]).norm() <= TOLERANCE
            && (edge.b - vertices[j]).norm() <= TOLERANCE;
        if !joined {
            return Err(GeometryError::InvalidArgument(format!(
                "edge {i} does not join face vertices {i} and {j}"
            ))
            .into());
        }
    }
    Ok(())
}

/// Lifts `face` to `z = 0` and rotates it about the line through `edge`.
fn fold_about_edge(face: &Polygon, edge: &Edge, tilt: f64) -> Result<Vec<Point3>> {
    let p0 = Point3::new(edge.a.x, edge.a.y, 0.0);
    let dir = Vector3::new(edge.b.x - edge.a.x, edge.b.y - edge.a.y, 0.0);
    let len = dir.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let axis = dir / len;
    Ok(face
        .vertices()
        .iter()
        .map(|v| rotate_about_axis(&Point3::new(v.x, v.y, 0.0), &p0, &axis, tilt))
        .collect())
}
