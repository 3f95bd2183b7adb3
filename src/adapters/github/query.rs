//! GraphQL query for default-branch history
//!
//! Owner, name, page size and cursor travel as variables, so the query text
//! itself never changes between pages.

use serde::Serialize;

/// History query; each commit carries up to 100 status contexts
pub const COMMITS_QUERY: &str = r"
query($owner: String!, $name: String!, $first: Int!, $after: String) {
  repository(owner: $owner, name: $name) {
    defaultBranchRef {
      target {
        ... on Commit {
          history(first: $first, after: $after) {
            edges { cursor }
            nodes {
              messageHeadline
              oid
              statusCheckRollup {
                contexts(last: 100) {
                  nodes {
                    ... on CheckRun {
                      conclusion
                      status
                      name
                      detailsUrl
                      checkSuite {
                        workflowRun {
                          workflow {
                            name
                          }
                        }
                      }
                    }
                    ... on StatusContext {
                      context
                      state
                      targetUrl
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
";

/// Variables for [`COMMITS_QUERY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitsVariables {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Page size
    pub first: usize,
    /// Cursor of the last commit on the previous page
    pub after: Option<String>,
}

/// A GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    /// Query document
    pub query: &'static str,
    /// Query variables
    pub variables: V,
}

/// Build the request for one history page
#[must_use]
pub fn commits_query(
    owner: &str,
    repo: &str,
    after: Option<&str>,
    first: usize,
) -> GraphQlRequest<CommitsVariables> {
    GraphQlRequest {
        query: COMMITS_QUERY,
        variables: CommitsVariables {
            owner: owner.to_string(),
            name: repo.to_string(),
            first,
            after: after.map(String::from),
        },
    }
}
