//! Raw commit history as returned by the hosting service
//!
//! Status contexts come in two shapes. Legacy commit statuses carry a
//! `context`; check runs carry a `name` and (for Actions) a workflow.
//! [`RawContext`] tells them apart by which fields are present.

use serde::Deserialize;

/// One page of default-branch history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryPage {
    /// Commits on this page, newest first
    pub commits: Vec<RawCommit>,
    /// Cursor of the last edge; `None` when the page had no edges
    pub end_cursor: Option<String>,
}

/// A commit node from the history query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommit {
    /// Commit hash
    pub oid: String,
    /// First line of the commit message
    #[serde(default)]
    pub message_headline: String,
    /// Aggregated status checks; `null` when nothing has reported
    #[serde(default)]
    pub status_check_rollup: Option<StatusCheckRollup>,
}

impl RawCommit {
    /// Status contexts in reported order
    #[must_use]
    pub fn contexts(&self) -> &[RawContext] {
        match &self.status_check_rollup {
            Some(rollup) => &rollup.contexts.nodes,
            None => &[],
        }
    }
}

/// `statusCheckRollup` object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusCheckRollup {
    /// Context connection
    pub contexts: ContextConnection,
}

/// `contexts` connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContextConnection {
    /// Context nodes
    #[serde(default)]
    pub nodes: Vec<RawContext>,
}

/// A status context in either of its two upstream shapes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawContext {
    /// Commit status API entry
    Legacy(LegacyStatus),
    /// Check run (GitHub Actions or a third-party app)
    CheckRun(CheckRun),
}

/// Commit status API entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStatus {
    /// Context name
    pub context: String,
    /// State token, e.g. `SUCCESS`, `ERROR`
    pub state: String,
    /// Link to the status details
    #[serde(default)]
    pub target_url: Option<String>,
}

/// Check run entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRun {
    /// Job name
    pub name: String,
    /// Final conclusion; `null` while the run is still going
    #[serde(default)]
    pub conclusion: Option<String>,
    /// Run status, e.g. `QUEUED`, `IN_PROGRESS`, `COMPLETED`
    #[serde(default)]
    pub status: Option<String>,
    /// Link to the job details
    #[serde(default)]
    pub details_url: Option<String>,
    /// Owning check suite
    #[serde(default)]
    pub check_suite: Option<CheckSuite>,
}

impl CheckRun {
    /// Name of the Actions workflow that produced the run, if any
    #[must_use]
    pub fn workflow_name(&self) -> Option<&str> {
        self.check_suite
            .as_ref()?
            .workflow_run
            .as_ref()
            .map(|run| run.workflow.name.as_str())
    }
}

/// Check suite of a check run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSuite {
    /// Workflow run; `null` for suites not created by Actions
    #[serde(default)]
    pub workflow_run: Option<WorkflowRun>,
}

/// Workflow run of a check suite
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowRun {
    /// Workflow definition
    pub workflow: Workflow,
}

/// Workflow definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workflow {
    /// Workflow name
    pub name: String,
}
