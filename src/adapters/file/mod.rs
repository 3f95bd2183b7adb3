//! File-based snapshot storage
//!
//! Implements `SnapshotStore` as a single pretty-printed JSON file that is
//! fully overwritten on every save.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::models::Snapshot;
use crate::core::ports::SnapshotStore;

/// Default snapshot filename, relative to the repository root
pub const STATUSES_FILE: &str = "statuses.json";

/// JSON file snapshot store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Snapshot> {
        let content = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Failed to read {} (pass --statuses '[]' to start from an empty snapshot)",
                self.path.display()
            )
        })?;
        Snapshot::from_json(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut content = snapshot.to_pretty_json()?;
        content.push('\n');
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
