mod containment;
mod locate;
mod proximity;

pub use containment::point_in_polygon;
pub use locate::locate_face;
pub use proximity::{closest_point_on_edge, distance_to_segment, is_near_edge, ClosestPointResult};
