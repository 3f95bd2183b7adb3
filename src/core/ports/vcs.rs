//! Version control system port
//!
//! Defines the interface for publishing the snapshot file.

use std::path::Path;

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
pub trait VersionControl {
    /// Stage `file`, commit it with `message` and push the result
    fn publish(&self, file: &Path, message: &str) -> anyhow::Result<()>;
}
