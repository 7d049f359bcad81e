use petgraph::graph::NodeIndex;

/// Structural failures of the tree store.
/// None of them leave the tree modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    UnknownNode(NodeIndex),
    NotAQuestion(NodeIndex),
    StaleLeafReference(NodeIndex),
    Malformed(String),
    TooDeep(usize),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode(x) => write!(f, "unknown node {}", x.index()),
            Self::NotAQuestion(x) => write!(f, "node {} is not a question", x.index()),
            Self::StaleLeafReference(x) => {
                write!(f, "leaf {} moved since it was guessed", x.index())
            }
            Self::Malformed(s) => write!(f, "malformed tree: {}", s),
            Self::TooDeep(h) => write!(f, "tree is {} levels deep, too deep to nest", h),
        }
    }
}

impl std::error::Error for TreeError {}
