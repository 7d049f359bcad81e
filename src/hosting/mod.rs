//! HTTP transport for the game engine.
pub mod handlers;
mod request;
mod response;
mod server;

pub use request::*;
pub use response::*;
pub use server::*;
