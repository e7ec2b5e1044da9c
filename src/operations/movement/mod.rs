mod clamp;
mod travel;

pub use clamp::{clamp_spawn, MoveOutcome, MovementClamp};
pub use travel::{EdgeTrigger, TravelEdges};
