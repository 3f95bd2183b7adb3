//! Poller - one complete polling run
//!
//! Fetch → compare against the previous snapshot → notify → persist → publish.
//! Equal snapshots short-circuit before any diffing, notification or write.

use log::{debug, info};

use super::diff::diff_snapshots;
use super::fetcher::fetch_snapshot;
use crate::core::models::{Notification, Snapshot};
use crate::core::ports::{CommitHistory, Notifier, SnapshotStore, VersionControl};

/// Result of a polling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of commits in the fetched snapshot
    pub commits_checked: usize,
    /// Whether the fetched snapshot differed from the previous one
    pub changed: bool,
    /// Notifications that were delivered, in send order
    pub notifications: Vec<Notification>,
    /// Whether the snapshot file was committed and pushed
    pub published: bool,
}

/// Wires the ports together for a single run
#[derive(Clone, Copy)]
pub struct Poller<'a> {
    history: &'a dyn CommitHistory,
    notifier: &'a dyn Notifier,
    store: &'a dyn SnapshotStore,
    publisher: Option<&'a dyn VersionControl>,
    max_commits: usize,
}

impl std::fmt::Debug for Poller<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("store", &self.store.path())
            .field("publish", &self.publisher.is_some())
            .field("max_commits", &self.max_commits)
            .finish_non_exhaustive()
    }
}

impl<'a> Poller<'a> {
    /// Create a poller that never publishes
    #[must_use]
    pub fn new(
        history: &'a dyn CommitHistory,
        notifier: &'a dyn Notifier,
        store: &'a dyn SnapshotStore,
        max_commits: usize,
    ) -> Self {
        Self {
            history,
            notifier,
            store,
            publisher: None,
            max_commits,
        }
    }

    /// Commit and push the snapshot file after it changes
    #[must_use]
    pub fn with_publisher(mut self, publisher: &'a dyn VersionControl) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Execute one run
    ///
    /// `previous` replaces the stored snapshot as the comparison baseline. The
    /// stored snapshot is loaded before anything is fetched, so a malformed
    /// file fails the run up front.
    pub fn run(&self, previous: Option<Snapshot>) -> anyhow::Result<RunOutcome> {
        let old = match previous {
            Some(snapshot) => snapshot,
            None => self.store.load()?,
        };
        let new = fetch_snapshot(self.history, self.max_commits)?;

        if old == new {
            info!("No status changes across {} commits", new.len());
            return Ok(RunOutcome {
                commits_checked: new.len(),
                changed: false,
                notifications: Vec::new(),
                published: false,
            });
        }

        let notifications = diff_snapshots(&old, &new);
        debug!("{} newly failing job(s)", notifications.len());
        for notification in &notifications {
            self.notifier.notify(notification)?;
        }

        self.store.save(&new)?;
        info!("Wrote {} commits to {}", new.len(), self.store.path().display());

        let published = match self.publisher {
            Some(vcs) => {
                let file = self.store.path();
                let name = file.file_name().map_or_else(
                    || file.display().to_string(),
                    |n| n.to_string_lossy().to_string(),
                );
                vcs.publish(file, &format!("Update `{name}`"))?;
                true
            },
            None => false,
        };

        Ok(RunOutcome {
            commits_checked: new.len(),
            changed: true,
            notifications,
            published,
        })
    }
}
