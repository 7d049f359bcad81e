//! A twenty-questions engine that guesses animals and learns from its misses.
//!
//! ## Modules
//!
//! - [`tree`] — the one shared decision tree and its single mutation
//! - [`game`] — per-player sessions walking the tree, and the shared [`game::Engine`]
//! - [`stats`] — durable game counters and the combined report
//! - [`display`] — text rendering and path replay
//! - [`save`] — json persistence in a data directory
//! - `hosting`, `play`, `config` — HTTP server, terminal game, CLI (feature `server`)
pub mod display;
pub mod game;
pub mod save;
pub mod stats;
pub mod tree;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;
#[cfg(feature = "server")]
pub mod play;

mod id;
pub use id::*;

// ============================================================================
// DEFAULTS
// ============================================================================
/// Address the HTTP server binds when `BIND_ADDR` is unset.
pub const BIND_ADDR: &str = "127.0.0.1:5000";
/// Directory holding the saved tree, counters and game log when `DATA_DIR` is unset.
pub const DATA_DIR: &str = "data";
/// Seconds a session may sit idle before it is evicted.
pub const SESSION_TTL: u64 = 1800;
/// Tallest tree the nested `/tree/data` dump will serve.
pub const MAX_SHAPE_DEPTH: usize = 256;
/// Live sessions kept before the least recently touched is evicted.
pub const MAX_SESSIONS: usize = 10_000;
/// Games listed by `/history`.
pub const RECENT_GAMES: usize = 50;
/// HTTP worker threads when `WORKERS` is unset.
pub const WORKERS: usize = 4;
/// How often the server looks for idle sessions.
pub const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Serializes a float rounded to two decimals.
pub fn rounded<S>(x: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64((x * 100.).round() / 100.)
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
