//! GitHub adapter
//!
//! Implements `CommitHistory` against the GitHub GraphQL API.
//!
//! - [`query`] - History query text and variables
//! - [`types`] - Response envelope

pub mod query;
pub mod types;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use thiserror::Error;

use crate::core::models::HistoryPage;
use crate::core::ports::CommitHistory;
use types::{GraphQlResponse, RepositoryData};

/// Public GitHub GraphQL endpoint
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Errors talking to the GraphQL API
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport, TLS or body decoding failure
    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("GitHub returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// The query itself was rejected
    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    /// The response had no usable history
    #[error("no history for {owner}/{repo}: {reason}")]
    MissingHistory {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
        /// Which part of the response was empty
        reason: &'static str,
    },
}

/// GraphQL client bound to one repository
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    endpoint: String,
    token: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a client for `owner/repo`
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, GitHubError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
        })
    }

    /// Fetch one page of default-branch history
    pub fn history_page(
        &self,
        after: Option<&str>,
        first: usize,
    ) -> Result<HistoryPage, GitHubError> {
        let request = query::commits_query(&self.owner, &self.repo, after, first);
        debug!("Querying {}/{} history after {:?}", self.owner, self.repo, after);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(USER_AGENT, concat!("ping-on-failure/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body: GraphQlResponse<RepositoryData> = response.json()?;
        if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(GitHubError::GraphQl(messages.join(", ")));
        }

        let history = body
            .data
            .ok_or_else(|| self.missing("response has no data"))?
            .repository
            .ok_or_else(|| self.missing("repository not found"))?
            .default_branch_ref
            .ok_or_else(|| self.missing("repository has no default branch"))?
            .target
            .and_then(|t| t.history)
            .ok_or_else(|| self.missing("default branch does not point at a commit"))?;

        Ok(HistoryPage {
            end_cursor: history.edges.last().map(|e| e.cursor.clone()),
            commits: history.nodes,
        })
    }

    fn missing(&self, reason: &'static str) -> GitHubError {
        GitHubError::MissingHistory {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            reason,
        }
    }
}

impl CommitHistory for GitHubClient {
    fn page(&self, after: Option<&str>, first: usize) -> anyhow::Result<HistoryPage> {
        Ok(self.history_page(after, first)?)
    }
}
