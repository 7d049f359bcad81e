//! Durability: json files in a data directory, or nothing at all.
mod disk;
mod store;

pub use disk::*;
pub use store::*;
