use super::*;
use serde::Serialize;

/// Structural summary of a [`Tree`], derived by one full walk.
///
/// `balance_factor` is the spread of leaf depths relative to the height:
/// 0 when every leaf sits at the same depth, approaching 1 as the
/// shallowest leaf nears the root while the deepest stays far away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub total_nodes: usize,
    pub height: usize,
    pub leaf_count: usize,
    #[serde(serialize_with = "crate::rounded")]
    pub average_depth: f64,
    #[serde(serialize_with = "crate::rounded")]
    pub balance_factor: f64,
}

impl From<&Tree> for Metrics {
    fn from(tree: &Tree) -> Self {
        let mut total_nodes = 0;
        let mut leaf_count = 0;
        let mut sum = 0;
        let mut min = usize::MAX;
        let mut max = 0;
        for visit in tree.walk() {
            total_nodes += 1;
            if visit.node.is_leaf() {
                leaf_count += 1;
                sum += visit.depth;
                min = min.min(visit.depth);
                max = max.max(visit.depth);
            }
        }
        let height = max;
        let min = min.min(max);
        Self {
            total_nodes,
            height,
            leaf_count,
            average_depth: match leaf_count {
                0 => 0.,
                n => sum as f64 / n as f64,
            },
            balance_factor: (max - min) as f64 / height.max(1) as f64,
        }
    }
}
