use super::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use serde::Serialize;

/// Nested dump of a [`Tree`], as served to the visualisation view.
///
/// `left` holds the yes-branch and `right` the no-branch. Leaves carry
/// `null` children. Nesting costs stack when serialized or dropped, so
/// trees taller than [`crate::MAX_SHAPE_DEPTH`] are refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub data: String,
    pub is_leaf: bool,
    #[serde(rename = "left")]
    pub yes: Option<Box<Shape>>,
    #[serde(rename = "right")]
    pub no: Option<Box<Shape>>,
}

impl Shape {
    pub fn leaf(animal: &str) -> Self {
        Self {
            data: animal.to_string(),
            is_leaf: true,
            yes: None,
            no: None,
        }
    }
    pub fn question(text: &str, yes: Self, no: Self) -> Self {
        Self {
            data: text.to_string(),
            is_leaf: false,
            yes: Some(Box::new(yes)),
            no: Some(Box::new(no)),
        }
    }
    fn plant(&self, graph: &mut DiGraph<Node, Branch>) -> Result<NodeIndex, TreeError> {
        match (self.is_leaf, &self.yes, &self.no) {
            (true, None, None) => Ok(graph.add_node(Node::Leaf(self.data.clone()))),
            (false, Some(yes), Some(no)) => {
                let x = graph.add_node(Node::Question(self.data.clone()));
                let y = yes.plant(graph)?;
                let n = no.plant(graph)?;
                graph.add_edge(x, y, Branch::Yes);
                graph.add_edge(x, n, Branch::No);
                Ok(x)
            }
            (true, _, _) => Err(TreeError::Malformed(format!("leaf '{}' has children", self.data))),
            (false, _, _) => Err(TreeError::Malformed(format!("question '{}' lacks a child", self.data))),
        }
    }
}

impl TryFrom<&Tree> for Shape {
    type Error = TreeError;
    /// Folds the pre-order [`Walk`] backwards: every subtree is finished
    /// before its parent is reached, yes on top of no.
    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        let height = tree.metrics().height;
        if height > crate::MAX_SHAPE_DEPTH {
            return Err(TreeError::TooDeep(height));
        }
        let visits = tree.walk().collect::<Vec<_>>();
        let mut built = Vec::<Self>::new();
        for visit in visits.into_iter().rev() {
            match visit.node {
                Node::Leaf(animal) => built.push(Self::leaf(animal)),
                Node::Question(text) => match (built.pop(), built.pop()) {
                    (Some(yes), Some(no)) => built.push(Self::question(text, yes, no)),
                    _ => return Err(TreeError::Malformed(format!("question '{}' lacks a child", text))),
                },
            }
        }
        match (built.pop(), built.is_empty()) {
            (Some(shape), true) => Ok(shape),
            _ => Err(TreeError::Malformed("walk did not close on one root".into())),
        }
    }
}

impl TryFrom<&Shape> for Tree {
    type Error = TreeError;
    fn try_from(shape: &Shape) -> Result<Self, Self::Error> {
        let mut graph = DiGraph::default();
        let root = shape.plant(&mut graph)?;
        Ok(Tree::grown(graph, root))
    }
}
