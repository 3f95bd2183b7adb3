//! GraphQL response envelope for the history query

use serde::Deserialize;

use crate::core::models::RawCommit;

/// Top-level GraphQL response
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Query result
    pub data: Option<T>,
    /// Query errors (GraphQL reports these with HTTP 200)
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    /// Error description
    pub message: String,
}

/// `data` of the history query
#[derive(Debug, Deserialize)]
pub struct RepositoryData {
    /// `null` when the repository does not exist or is not visible
    pub repository: Option<Repository>,
}

/// Repository node
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// `null` for empty repositories
    pub default_branch_ref: Option<BranchRef>,
}

/// Default branch ref
#[derive(Debug, Deserialize)]
pub struct BranchRef {
    /// Object the ref points at
    pub target: Option<Target>,
}

/// Ref target; only commits carry a history
#[derive(Debug, Deserialize)]
pub struct Target {
    /// Commit history (absent for non-commit targets)
    #[serde(default)]
    pub history: Option<History>,
}

/// History connection
#[derive(Debug, Deserialize)]
pub struct History {
    /// Edges, used for their cursors
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Commit nodes
    #[serde(default)]
    pub nodes: Vec<RawCommit>,
}

/// History edge
#[derive(Debug, Deserialize)]
pub struct Edge {
    /// Pagination cursor
    pub cursor: String,
}
