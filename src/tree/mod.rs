//! Tree store: the single self-extending decision tree.
//!
//! - [`Tree`] — arena of [`Node`]s linked by [`Branch`] edges
//! - [`Tree::learn`] — the one structural mutation
//! - [`Walk`] — lazy pre-order traversal
//! - [`Metrics`] — derived structural statistics
//! - [`Shape`] / [`Snapshot`] — nested view dump and flat persisted dump
mod branch;
mod error;
mod lesson;
mod metrics;
mod node;
mod seed;
mod shape;
mod snapshot;
mod tree;
mod walk;

pub use branch::*;
pub use error::*;
pub use lesson::*;
pub use metrics::*;
pub use node::*;
pub use seed::*;
pub use shape::*;
pub use snapshot::*;
pub use tree::*;
pub use walk::*;

pub use petgraph::graph::NodeIndex;
