use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::path::PathBuf;

/// for types that are written to
/// and loaded from the data directory
/// as one json document each.
pub trait Disk: Serialize + DeserializeOwned {
    /// file stem inside the data directory
    fn name() -> &'static str;
    /// path to file on disk
    fn path(dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", Self::name()))
    }
    /// check if file exists on disk
    fn done(dir: &Path) -> bool {
        Self::path(dir).is_file()
    }
    /// read from disk
    fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = Self::path(dir);
        let file = std::fs::File::open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parse {}", path.display()))
    }
    /// write to disk. readers see the old
    /// file or the new one, never half of either.
    fn save(&self, dir: &Path) -> anyhow::Result<()> {
        let path = Self::path(dir);
        let temp = path.with_extension("json.tmp");
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let bytes = serde_json::to_vec_pretty(self)?;
        std::fs::write(&temp, bytes).with_context(|| format!("write {}", temp.display()))?;
        std::fs::rename(&temp, &path).with_context(|| format!("replace {}", path.display()))?;
        log::debug!("saved {}", path.display());
        Ok(())
    }
}

impl Disk for crate::tree::Snapshot {
    fn name() -> &'static str {
        "tree"
    }
}

impl Disk for crate::stats::Tally {
    fn name() -> &'static str {
        "stats"
    }
}

impl Disk for crate::stats::History {
    fn name() -> &'static str {
        "history"
    }
}
