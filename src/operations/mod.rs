pub mod creation;
pub mod movement;
pub mod projection;
pub mod query;
