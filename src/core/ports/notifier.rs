//! Notification delivery port

use crate::core::models::Notification;

/// Delivers one chat message per failing check
///
/// A delivery failure is returned to the caller; implementations never retry.
pub trait Notifier {
    /// Send a single notification
    fn notify(&self, notification: &Notification) -> anyhow::Result<()>;
}
