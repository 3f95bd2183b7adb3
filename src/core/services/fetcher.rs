//! Snapshot fetcher
//!
//! Walks default-branch history page by page until either enough commits
//! have been collected or the hosting service runs out of pages.

use log::debug;

use super::normalizer::normalize_commit;
use crate::core::models::Snapshot;
use crate::core::ports::CommitHistory;

/// Commits requested per history page
pub const PAGE_SIZE: usize = 15;

/// Default bound on the number of commits checked per run
pub const DEFAULT_MAX_COMMITS: usize = 10;

/// Fetch the newest `max_commits` commits of the default branch
///
/// No retries: the first failing page aborts the fetch.
pub fn fetch_snapshot(
    history: &dyn CommitHistory,
    max_commits: usize,
) -> anyhow::Result<Snapshot> {
    let mut commits = Vec::new();
    let mut cursor: Option<String> = None;

    while commits.len() < max_commits {
        let page = history.page(cursor.as_deref(), PAGE_SIZE)?;
        debug!("Checking {} commits", page.commits.len());

        if page.commits.is_empty() {
            break;
        }
        commits.extend(page.commits.iter().map(normalize_commit));

        match page.end_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    commits.truncate(max_commits);
    Ok(Snapshot::new(commits))
}
