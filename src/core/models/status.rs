//! Normalized status model
//!
//! These are the shapes persisted to `statuses.json`. Field names match the
//! on-disk format so existing snapshot files keep loading.

use serde::{Deserialize, Deserializer, Serialize};

/// One named CI check attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStatus {
    /// Display name (`"{workflow} / {job}"` for check runs, the context for legacy statuses)
    pub name: String,

    /// Raw status or conclusion token, e.g. `SUCCESS`, `FAILURE`, `PENDING`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,

    /// Link to the job's details page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl CheckStatus {
    /// Create a new check status
    #[must_use]
    pub fn new(name: impl Into<String>, status: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            url: url.into(),
        }
    }
}

/// A fetched commit together with its normalized checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit hash
    pub oid: String,

    /// Checks in the order the hosting service reported them
    #[serde(default)]
    pub statuses: Vec<CheckStatus>,

    /// First line of the commit message
    #[serde(rename = "messageHeadline", default, deserialize_with = "null_as_empty")]
    pub message_headline: String,
}

impl CommitRecord {
    /// Create a new commit record
    #[must_use]
    pub fn new(
        oid: impl Into<String>,
        message_headline: impl Into<String>,
        statuses: Vec<CheckStatus>,
    ) -> Self {
        Self {
            oid: oid.into(),
            statuses,
            message_headline: message_headline.into(),
        }
    }

    /// Whether a check with this name was reported for the commit
    #[must_use]
    pub fn has_check(&self, name: &str) -> bool {
        self.statuses.iter().any(|s| s.name == name)
    }
}

/// Older snapshot files may carry `null` where a string is expected
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
