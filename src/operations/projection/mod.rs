mod config;
mod project_neighbors;

pub use config::{ProjectionConfig, DEFAULT_CAMERA_DISTANCE, DODECAHEDRON_DIHEDRAL_DEG};
pub use project_neighbors::ProjectNeighbors;
