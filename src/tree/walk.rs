use super::*;
use petgraph::graph::NodeIndex;

/// One stop of a [`Walk`].
#[derive(Debug, Clone, Copy)]
pub struct Visit<'tree> {
    pub index: NodeIndex,
    pub depth: usize,
    /// Edge taken from the parent. None at the root.
    pub branch: Option<Branch>,
    pub node: &'tree Node,
}

/// Pre-order traversal over a [`Tree`].
///
/// Explicit stack, so arbitrarily deep chains of learned questions
/// never touch the call stack. Finite: yields each node exactly once.
pub struct Walk<'tree> {
    tree: &'tree Tree,
    stack: Vec<(NodeIndex, usize, Option<Branch>)>,
}

impl<'tree> From<&'tree Tree> for Walk<'tree> {
    fn from(tree: &'tree Tree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root(), 0, None)],
        }
    }
}

impl<'tree> Iterator for Walk<'tree> {
    type Item = Visit<'tree>;
    fn next(&mut self) -> Option<Self::Item> {
        let (index, depth, branch) = self.stack.pop()?;
        let node = self.tree.at(index).ok()?;
        if node.is_question() {
            self.stack.extend(
                [Branch::No, Branch::Yes]
                    .into_iter()
                    .filter_map(|b| self.tree.child(index, b).ok().map(|c| (c, depth + 1, Some(b)))),
            );
        }
        Some(Visit {
            index,
            depth,
            branch,
            node,
        })
    }
}
