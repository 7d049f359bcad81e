//! Game session engine: one traversal per player over the shared tree.
mod engine;
mod error;
mod phase;
mod session;
mod turn;

pub use engine::*;
pub use error::*;
pub use phase::*;
pub use session::*;
pub use turn::*;
