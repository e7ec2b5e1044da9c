mod build_pentagon;
mod make_dodeca_net;

pub use build_pentagon::BuildPentagon;
pub use make_dodeca_net::{DodecaNet, MakeDodecaNet};
