//! Diff engine
//!
//! Decides which checks of a new snapshot warrant a notification. Novelty
//! is name-based: a check whose name was already recorded for the same
//! commit is never reported again, whatever its status did since.

use crate::core::models::{CheckStatus, Notification, Snapshot};

/// Failure predicate: the status token contains `error` or `fail`, ignoring case
///
/// `CANCELLED`, `TIMED_OUT` and `ACTION_REQUIRED` do not match.
#[must_use]
pub fn is_failure(status: &str) -> bool {
    let status = status.to_lowercase();
    status.contains("error") || status.contains("fail")
}

/// Compute the notifications for `new` relative to `old`
///
/// Within a commit, notifications come out in reverse status order.
#[must_use]
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for commit in new {
        let unseen: Vec<&CheckStatus> = match old.find(&commit.oid) {
            Some(previous) => {
                commit.statuses.iter().filter(|s| !previous.has_check(&s.name)).collect()
            },
            None => commit.statuses.iter().collect(),
        };

        notifications.extend(
            unseen
                .into_iter()
                .filter(|s| is_failure(&s.status))
                .rev()
                .map(|s| Notification::new(commit, s)),
        );
    }

    notifications
}
