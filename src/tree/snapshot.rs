use super::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::collections::HashSet;

/// Flat, id-keyed dump of a [`Tree`] for durable storage.
///
/// Ids are pre-order positions at the time of writing. A flat list keeps
/// loading free of recursion however deep the tree has grown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: usize,
    pub nodes: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Question {
        id: usize,
        text: String,
        yes: usize,
        no: usize,
    },
    Leaf {
        id: usize,
        animal: String,
    },
}

impl Record {
    pub fn id(&self) -> usize {
        match self {
            Self::Question { id, .. } => *id,
            Self::Leaf { id, .. } => *id,
        }
    }
}

impl From<&Tree> for Snapshot {
    fn from(tree: &Tree) -> Self {
        let ids = tree
            .walk()
            .enumerate()
            .map(|(i, v)| (v.index, i))
            .collect::<HashMap<NodeIndex, usize>>();
        let nodes = tree
            .walk()
            .map(|v| match v.node {
                Node::Leaf(animal) => Record::Leaf {
                    id: ids[&v.index],
                    animal: animal.clone(),
                },
                Node::Question(text) => Record::Question {
                    id: ids[&v.index],
                    text: text.clone(),
                    yes: tree.child(v.index, Branch::Yes).map(|c| ids[&c]).unwrap_or(usize::MAX),
                    no: tree.child(v.index, Branch::No).map(|c| ids[&c]).unwrap_or(usize::MAX),
                },
            })
            .collect();
        Self {
            root: ids[&tree.root()],
            nodes,
        }
    }
}

/// Rebuilds the arena, refusing anything that is not a strict rooted
/// binary tree: duplicate ids, dangling links, shared subtrees, cycles,
/// or records unreachable from the root.
impl TryFrom<&Snapshot> for Tree {
    type Error = TreeError;
    fn try_from(snapshot: &Snapshot) -> Result<Self, Self::Error> {
        let mut records = HashMap::with_capacity(snapshot.nodes.len());
        for record in snapshot.nodes.iter() {
            if records.insert(record.id(), record).is_some() {
                return Err(TreeError::Malformed(format!("duplicate id {}", record.id())));
            }
        }
        let mut graph = DiGraph::<Node, Branch>::with_capacity(records.len(), records.len());
        let mut seen = HashSet::with_capacity(records.len());
        let mut stack = vec![(snapshot.root, None::<(NodeIndex, Branch)>)];
        let mut root = None;
        while let Some((id, parent)) = stack.pop() {
            if !seen.insert(id) {
                return Err(TreeError::Malformed(format!("node {} reached twice", id)));
            }
            let record = records
                .get(&id)
                .ok_or_else(|| TreeError::Malformed(format!("missing node {}", id)))?;
            let x = match record {
                Record::Leaf { animal, .. } => graph.add_node(Node::Leaf(animal.clone())),
                Record::Question { text, yes, no, .. } => {
                    let x = graph.add_node(Node::Question(text.clone()));
                    stack.push((*no, Some((x, Branch::No))));
                    stack.push((*yes, Some((x, Branch::Yes))));
                    x
                }
            };
            match parent {
                Some((p, branch)) => {
                    graph.add_edge(p, x, branch);
                }
                None => root = Some(x),
            }
        }
        if seen.len() != records.len() {
            return Err(TreeError::Malformed(format!(
                "{} nodes unreachable from root",
                records.len() - seen.len()
            )));
        }
        let root = root.ok_or_else(|| TreeError::Malformed("empty tree".into()))?;
        Ok(Tree::grown(graph, root))
    }
}
