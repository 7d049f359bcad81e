use super::*;
use petgraph::graph::DiGraph;
use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::sync::OnceLock;

/// The shared animal decision tree.
///
/// Nodes live in a petgraph arena and are addressed by [`NodeIndex`].
/// Nothing is ever removed from the arena, so an index handed out once
/// stays valid for the life of the tree; only edges get rewired, and only
/// by [`Tree::learn`].
///
/// # Shape
///
/// - every [`Node::Question`] has exactly one `Yes` and one `No` edge
/// - every [`Node::Leaf`] has none
/// - every node but the root has exactly one parent
///
/// # Reads
///
/// - `root()` / `at(x)` / `child(x, branch)` — single-step navigation
/// - `walk()` — lazy pre-order traversal
/// - `metrics()` — structural summary, cached until the next `learn`
#[derive(Debug, Clone)]
pub struct Tree {
    graph: DiGraph<Node, Branch>,
    root: NodeIndex,
    cache: OnceLock<Metrics>,
}

impl Tree {
    /// A tree that knows one animal and asks nothing.
    pub fn leaf(animal: impl Into<String>) -> Self {
        let mut graph = DiGraph::default();
        let root = graph.add_node(Node::Leaf(animal.into()));
        Self::grown(graph, root)
    }
    pub fn root(&self) -> NodeIndex {
        self.root
    }
    /// Number of nodes in the tree.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn at(&self, x: NodeIndex) -> Result<&Node, TreeError> {
        self.graph.node_weight(x).ok_or(TreeError::UnknownNode(x))
    }
    pub fn is_leaf(&self, x: NodeIndex) -> Result<bool, TreeError> {
        self.at(x).map(Node::is_leaf)
    }
    /// Child reached by answering `branch` at question `x`.
    pub fn child(&self, x: NodeIndex, branch: Branch) -> Result<NodeIndex, TreeError> {
        match self.at(x)? {
            Node::Leaf(_) => Err(TreeError::NotAQuestion(x)),
            Node::Question(_) => self
                .graph
                .edges_directed(x, petgraph::Outgoing)
                .find(|e| *e.weight() == branch)
                .map(|e| e.target())
                .ok_or_else(|| TreeError::Malformed(format!("question {} lacks {}", x.index(), branch))),
        }
    }
    /// Parent question (None at the root).
    pub fn parent(&self, x: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(x, petgraph::Incoming)
            .next()
    }
    /// Number of edges between the root and `x`.
    pub fn depth(&self, x: NodeIndex) -> usize {
        std::iter::successors(self.parent(x), |p| self.parent(*p)).count()
    }
    /// Lazy pre-order walk, yes-branch before no-branch.
    pub fn walk(&self) -> Walk<'_> {
        Walk::from(self)
    }
    /// Every animal the tree can guess, in pre-order.
    pub fn animals(&self) -> Vec<String> {
        self.walk()
            .filter_map(|v| v.node.animal())
            .map(String::from)
            .collect()
    }
    pub fn metrics(&self) -> Metrics {
        *self.cache.get_or_init(|| Metrics::from(self))
    }
}

impl Tree {
    /// Turns leaf `leaf` into a question separating it from a new animal.
    ///
    /// `above` is the parent the caller saw when it reached the leaf. If the
    /// leaf has since been pushed down by another learn, or is no longer a
    /// leaf, nothing changes and `StaleLeafReference` comes back.
    ///
    /// Returns the new question node, which now sits where the leaf was.
    pub fn learn(
        &mut self,
        leaf: NodeIndex,
        above: Option<NodeIndex>,
        lesson: Lesson,
    ) -> Result<NodeIndex, TreeError> {
        if !self.is_leaf(leaf)? || self.parent(leaf) != above {
            return Err(TreeError::StaleLeafReference(leaf));
        }
        let incoming = self.incoming(leaf);
        let question = self.graph.add_node(Node::Question(lesson.question));
        let animal = self.graph.add_node(Node::Leaf(lesson.animal));
        match incoming {
            Some((edge, parent, branch)) => {
                self.graph.remove_edge(edge);
                self.graph.add_edge(parent, question, branch);
            }
            None => self.root = question,
        }
        self.graph.add_edge(question, animal, lesson.branch);
        self.graph.add_edge(question, leaf, !lesson.branch);
        self.cache = OnceLock::new();
        Ok(question)
    }
    fn incoming(&self, x: NodeIndex) -> Option<(EdgeIndex, NodeIndex, Branch)> {
        self.graph
            .edges_directed(x, petgraph::Incoming)
            .next()
            .map(|e| (e.id(), e.source(), *e.weight()))
    }
}

impl Tree {
    /// Wraps an arena the caller has already checked for shape.
    pub(super) fn grown(graph: DiGraph<Node, Branch>, root: NodeIndex) -> Self {
        Self {
            graph,
            root,
            cache: OnceLock::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn edges(tree: &Tree) -> HashSet<(usize, usize, Branch)> {
        tree.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
            .collect()
    }

    fn descend(tree: &Tree, answers: &[Branch]) -> NodeIndex {
        answers
            .iter()
            .fold(tree.root(), |x, b| tree.child(x, *b).unwrap())
    }

    #[test]
    fn single_leaf_is_a_whole_tree() {
        let tree = Tree::leaf("Dog");
        assert!(tree.is_leaf(tree.root()).unwrap());
        assert_eq!(tree.n(), 1);
        assert_eq!(tree.animals(), vec!["Dog"]);
    }

    #[test]
    fn child_of_leaf_is_refused() {
        let tree = Tree::leaf("Dog");
        assert_eq!(
            tree.child(tree.root(), Branch::Yes),
            Err(TreeError::NotAQuestion(tree.root()))
        );
    }

    #[test]
    fn learn_at_root_replaces_root() {
        let mut tree = Tree::leaf("Dog");
        let dog = tree.root();
        let lesson = Lesson::new("Cat", "Does it bark?", Branch::No);
        let question = tree.learn(dog, None, lesson).unwrap();
        assert_eq!(tree.root(), question);
        assert_eq!(tree.at(question).unwrap().question(), Some("Does it bark?"));
        assert_eq!(tree.child(question, Branch::Yes), Ok(dog));
        let cat = tree.child(question, Branch::No).unwrap();
        assert_eq!(tree.at(cat).unwrap().animal(), Some("Cat"));
        assert_eq!(tree.metrics().leaf_count, 2);
        assert_eq!(tree.metrics().height, 1);
    }

    #[test]
    fn learn_preserves_everything_else() {
        let mut tree = Tree::default();
        let path = [Branch::Yes, Branch::No, Branch::Yes, Branch::Yes, Branch::Yes, Branch::Yes];
        let leaf = descend(&tree, &path);
        let above = tree.parent(leaf);
        let animal = tree.at(leaf).unwrap().clone();
        let before = tree.clone();
        let question = tree
            .learn(leaf, above, Lesson::new("Wolf", "Is it wild?", Branch::Yes))
            .unwrap();
        let wolf = tree.child(question, Branch::Yes).unwrap();
        assert_eq!(tree.at(wolf).unwrap().animal(), Some("Wolf"));
        assert_eq!(tree.child(question, Branch::No), Ok(leaf));
        assert_eq!(tree.at(leaf).unwrap(), &animal);
        assert_eq!(tree.parent(question), above);
        for x in before.graph.node_indices() {
            assert_eq!(before.at(x), tree.at(x));
        }
        let removed = (above.unwrap().index(), leaf.index(), Branch::Yes);
        let after = edges(&tree);
        assert!(edges(&before)
            .into_iter()
            .filter(|e| *e != removed)
            .all(|e| after.contains(&e)));
        assert_eq!(after.len(), before.graph.edge_count() + 2);
        assert_eq!(tree.n(), before.n() + 2);
    }

    #[test]
    fn learn_on_moved_leaf_is_stale() {
        let mut tree = Tree::leaf("Dog");
        let dog = tree.root();
        tree.learn(dog, None, Lesson::new("Cat", "Does it bark?", Branch::No))
            .unwrap();
        let before = tree.clone();
        let result = tree.learn(dog, None, Lesson::new("Wolf", "Is it wild?", Branch::Yes));
        assert_eq!(result, Err(TreeError::StaleLeafReference(dog)));
        assert_eq!(edges(&before), edges(&tree));
        assert_eq!(before.root(), tree.root());
    }

    #[test]
    fn learn_on_question_is_stale() {
        let mut tree = Tree::default();
        let root = tree.root();
        let result = tree.learn(root, None, Lesson::new("Cat", "Meows?", Branch::Yes));
        assert_eq!(result, Err(TreeError::StaleLeafReference(root)));
    }

    #[test]
    fn learn_on_unknown_node_fails() {
        let mut tree = Tree::leaf("Dog");
        let ghost = NodeIndex::new(42);
        let result = tree.learn(ghost, None, Lesson::new("Cat", "Meows?", Branch::Yes));
        assert_eq!(result, Err(TreeError::UnknownNode(ghost)));
    }

    #[test]
    fn leaves_sit_no_deeper_than_height() {
        let tree = Tree::default();
        let height = tree.metrics().height;
        let leaves = tree.walk().filter(|v| v.node.is_leaf()).collect::<Vec<_>>();
        assert!(leaves.iter().all(|v| v.depth <= height));
        assert!(leaves.iter().all(|v| tree.depth(v.index) == v.depth));
        assert_eq!(leaves.len(), tree.metrics().leaf_count);
        assert!(leaves
            .iter()
            .all(|v| tree.graph.neighbors(v.index).count() == 0));
    }

    #[test]
    fn any_fixed_answer_reaches_a_guess_within_height() {
        let tree = Tree::default();
        let height = tree.metrics().height;
        for answer in Branch::ALL {
            let mut x = tree.root();
            let mut asked = 0;
            while !tree.is_leaf(x).unwrap() {
                x = tree.child(x, answer).unwrap();
                asked += 1;
            }
            assert!(asked <= height);
        }
    }
}
