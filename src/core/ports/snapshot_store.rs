//! Snapshot persistence port

use std::path::Path;

use crate::core::models::Snapshot;

/// Durable home of the last observed snapshot
pub trait SnapshotStore {
    /// Load the previously persisted snapshot
    fn load(&self) -> anyhow::Result<Snapshot>;

    /// Replace the persisted snapshot
    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()>;

    /// Location of the backing file
    fn path(&self) -> &Path;
}
