pub mod bounds;
pub mod edge;
pub mod polygon;

pub use bounds::Bounds2;
pub use edge::Edge;
pub use polygon::Polygon;
