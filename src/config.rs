//! Command line and environment configuration.
use crate::game::Engine;
use crate::save::Store;
use crate::tree::Tree;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Thinks of questions until it guesses your animal", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    #[command(about = "Serve the game over HTTP (default)")]
    Serve,
    #[command(about = "Play against the same tree in this terminal")]
    Play,
    #[command(about = "Print the tree and the statistics, then exit")]
    Show,
}

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Address to listen on
    #[arg(long, global = true, env = "BIND_ADDR", default_value = crate::BIND_ADDR)]
    pub bind: String,
    /// Directory for tree.json, stats.json and history.json
    #[arg(long, global = true, env = "DATA_DIR", default_value = crate::DATA_DIR)]
    pub data: PathBuf,
    /// Seconds before an idle session is dropped
    #[arg(long, global = true, env = "SESSION_TTL", default_value_t = crate::SESSION_TTL)]
    pub ttl: u64,
    /// Live sessions kept before the stalest is evicted
    #[arg(long, global = true, env = "MAX_SESSIONS", default_value_t = crate::MAX_SESSIONS)]
    pub max_sessions: usize,
    /// HTTP worker threads
    #[arg(long, global = true, env = "WORKERS", default_value_t = crate::WORKERS)]
    pub workers: usize,
    /// Start from a single animal instead of the default tree, if nothing is saved
    #[arg(long, global = true, env = "SEED_ANIMAL")]
    pub seed: Option<String>,
    /// Keep everything in memory
    #[arg(long, global = true)]
    pub memory: bool,
}

impl Config {
    pub fn store(&self) -> Store {
        match self.memory {
            true => Store::memory(),
            false => Store::disk(&self.data),
        }
    }
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
    pub fn engine(&self) -> anyhow::Result<Engine> {
        let seed = self.seed.clone().filter(|s| !s.trim().is_empty());
        Engine::new(self.store(), self.ttl(), move || match seed {
            Some(animal) => Tree::leaf(animal.trim()),
            None => Tree::default(),
        })
        .map(|engine| engine.capped(self.max_sessions))
    }
}
