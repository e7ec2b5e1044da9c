pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod room;
pub mod topology;

pub use error::{PentanetError, Result};
pub use geometry::{Edge, Polygon};
pub use math::Point2;
pub use operations::creation::BuildPentagon;
pub use operations::projection::{ProjectNeighbors, ProjectionConfig};
pub use operations::query::{distance_to_segment, locate_face, point_in_polygon};
pub use topology::{Face, FaceId, FaceNet};
