//! Status normalizer
//!
//! Flattens both upstream context shapes into [`CheckStatus`] without
//! dropping or reordering entries.

use crate::core::models::raw::{CheckRun, LegacyStatus};
use crate::core::models::{CheckStatus, CommitRecord, RawCommit, RawContext};

impl From<&LegacyStatus> for CheckStatus {
    fn from(status: &LegacyStatus) -> Self {
        Self {
            name: status.context.clone(),
            status: status.state.clone(),
            url: status.target_url.clone().unwrap_or_default(),
        }
    }
}

impl From<&CheckRun> for CheckStatus {
    fn from(run: &CheckRun) -> Self {
        let name = match run.workflow_name() {
            Some(workflow) => format!("{workflow} / {}", run.name),
            None => run.name.clone(),
        };
        // conclusion is null until the run completes
        let status = run.conclusion.clone().or_else(|| run.status.clone()).unwrap_or_default();
        Self {
            name,
            status,
            url: run.details_url.clone().unwrap_or_default(),
        }
    }
}

impl From<&RawContext> for CheckStatus {
    fn from(context: &RawContext) -> Self {
        match context {
            RawContext::Legacy(status) => status.into(),
            RawContext::CheckRun(run) => run.into(),
        }
    }
}

/// Convert a raw history node into a commit record
#[must_use]
pub fn normalize_commit(commit: &RawCommit) -> CommitRecord {
    CommitRecord {
        oid: commit.oid.clone(),
        statuses: commit.contexts().iter().map(CheckStatus::from).collect(),
        message_headline: commit.message_headline.clone(),
    }
}
