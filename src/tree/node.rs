/// Vertex weight of the decision tree.
///
/// Question nodes always carry exactly two outgoing edges (one per
/// [`super::Branch`]); leaves carry none. The graph enforces nothing,
/// so every constructor in [`super::Tree`] keeps that shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Question(String),
    Leaf(String),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
    pub fn is_question(&self) -> bool {
        matches!(self, Self::Question(_))
    }
    pub fn question(&self) -> Option<&str> {
        match self {
            Self::Question(text) => Some(text),
            Self::Leaf(_) => None,
        }
    }
    pub fn animal(&self) -> Option<&str> {
        match self {
            Self::Leaf(animal) => Some(animal),
            Self::Question(_) => None,
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question(text) => write!(f, "{}", text),
            Self::Leaf(animal) => write!(f, "[{}]", animal),
        }
    }
}
