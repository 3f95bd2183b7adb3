//! Commit history port
//!
//! Defines how the fetcher reads default-branch history one page at a time.

use crate::core::models::HistoryPage;

/// Paginated access to a repository's default-branch history
pub trait CommitHistory {
    /// Fetch up to `first` commits, starting after `after` (or from the tip when `None`)
    fn page(&self, after: Option<&str>, first: usize) -> anyhow::Result<HistoryPage>;
}
