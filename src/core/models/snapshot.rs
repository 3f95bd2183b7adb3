//! Snapshot of the most recently observed commits
//!
//! A snapshot is a value: it is built once per run and compared as a whole
//! against the previous one. There are no mutating accessors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CommitRecord;

/// Errors raised while decoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The input is not a JSON array of commit records
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Ordered commits, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<CommitRecord>);

impl Snapshot {
    /// Create a snapshot from already normalized commits
    #[must_use]
    pub const fn new(commits: Vec<CommitRecord>) -> Self {
        Self(commits)
    }

    /// Commits in fetch order
    #[must_use]
    pub fn commits(&self) -> &[CommitRecord] {
        &self.0
    }

    /// Number of commits
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no commits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First commit with the given hash
    #[must_use]
    pub fn find(&self, oid: &str) -> Option<&CommitRecord> {
        self.0.iter().find(|c| c.oid == oid)
    }

    /// Decode a snapshot from its JSON array form
    pub fn from_json(content: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Decode a snapshot passed inline on the command line
    ///
    /// Accepts the array form plus `{}` and `null`, both meaning "nothing seen yet".
    pub fn from_override(content: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(map) if map.is_empty() => Ok(Self::default()),
            other => Ok(serde_json::from_value(other)?),
        }
    }

    /// Encode as pretty-printed JSON (2-space indent)
    pub fn to_pretty_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<CommitRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = CommitRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a CommitRecord;
    type IntoIter = std::slice::Iter<'a, CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
