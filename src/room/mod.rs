//! Per-face room data and the generic runner that turns a definition into
//! live geometry.

mod config;
mod definition;
mod runner;

pub use config::RoomConfig;
pub use definition::{
    Atlas, FaceDefinition, FaceKey, DEFAULT_EDGE_TRIGGER_SCALE, DEFAULT_FACE_RADIUS,
};
pub use runner::{Room, RoomTick};
