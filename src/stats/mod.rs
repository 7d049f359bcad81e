//! Statistics aggregator: durable win/loss counters, the per-game log,
//! and the combined report.
mod history;
mod report;
mod statistics;
mod tally;

pub use history::*;
pub use report::*;
pub use statistics::*;
pub use tally::*;
