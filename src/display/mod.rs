//! Human-facing views: the drawn tree and a finished game's route.
mod render;
mod replay;

pub use render::*;
pub use replay::*;
