//! Terminal front end over the same tree the server uses.
mod console;
mod show;

pub use console::*;
pub use show::*;
