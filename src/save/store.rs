use super::*;
use crate::stats::History;
use crate::stats::Tally;
use crate::tree::Snapshot;
use crate::tree::Tree;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Where the tree and the game counters live between runs.
///
/// A memory store forgets everything at exit. A disk store keeps
/// `tree.json`, `stats.json` and `history.json` in one directory.
#[derive(Debug, Clone, Default)]
pub struct Store(Option<PathBuf>);

impl Store {
    pub fn memory() -> Self {
        Self(None)
    }
    pub fn disk(dir: impl Into<PathBuf>) -> Self {
        Self(Some(dir.into()))
    }
    pub fn dir(&self) -> Option<&Path> {
        self.0.as_deref()
    }
}

impl Store {
    /// Loads the persisted tree, or plants `seed` and writes it out.
    /// A persisted tree that fails validation is an error, not a reason
    /// to start over on top of it.
    pub fn tree(&self, seed: impl FnOnce() -> Tree) -> anyhow::Result<Tree> {
        match self.dir() {
            None => Ok(seed()),
            Some(dir) if Snapshot::done(dir) => {
                let snapshot = Snapshot::load(dir)?;
                let tree = Tree::try_from(&snapshot)
                    .with_context(|| format!("invalid tree in {}", Snapshot::path(dir).display()))?;
                log::info!("loaded {} nodes from {}", tree.n(), Snapshot::path(dir).display());
                Ok(tree)
            }
            Some(dir) => {
                let tree = seed();
                log::info!("no tree in {}, planting {} animals", dir.display(), tree.metrics().leaf_count);
                self.keep(&Snapshot::from(&tree))
                    .inspect_err(|e| log::error!("could not write seed tree: {:#}", e))
                    .ok();
                Ok(tree)
            }
        }
    }
    /// Loads the persisted counters, or starts from zero.
    pub fn tally(&self) -> anyhow::Result<Tally> {
        match self.dir() {
            Some(dir) if Tally::done(dir) => Tally::load(dir),
            _ => Ok(Tally::default()),
        }
    }
    /// Loads the game log, or starts empty.
    pub fn history(&self) -> anyhow::Result<History> {
        match self.dir() {
            Some(dir) if History::done(dir) => History::load(dir),
            _ => Ok(History::default()),
        }
    }
    pub fn keep(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        match self.dir() {
            Some(dir) => snapshot.save(dir),
            None => Ok(()),
        }
    }
    pub fn count(&self, tally: &Tally) -> anyhow::Result<()> {
        match self.dir() {
            Some(dir) => tally.save(dir),
            None => Ok(()),
        }
    }
    pub fn journal(&self, history: &History) -> anyhow::Result<()> {
        match self.dir() {
            Some(dir) => history.save(dir),
            None => Ok(()),
        }
    }
}
