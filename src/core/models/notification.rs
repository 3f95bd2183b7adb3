//! Notification events produced by the diff engine

use serde::Serialize;

use super::{CheckStatus, CommitRecord};

/// A check that newly entered a failing state on a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Commit hash
    pub oid: String,
    /// Commit message headline
    pub message_headline: String,
    /// Name of the failing check
    pub check_name: String,
    /// Link to the failing job
    pub url: String,
}

impl Notification {
    /// Bind a failing check to the commit it was reported on
    #[must_use]
    pub fn new(commit: &CommitRecord, check: &CheckStatus) -> Self {
        Self {
            oid: commit.oid.clone(),
            message_headline: commit.message_headline.clone(),
            check_name: check.name.clone(),
            url: check.url.clone(),
        }
    }

    /// Chat message text
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Job `{}` failed on commit `{}`: {}",
            self.check_name, self.oid, self.message_headline
        )
    }
}
