//! Domain models
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CheckStatus`] / [`CommitRecord`] / [`Snapshot`] - normalized, persisted state
//! - [`Notification`] - a check that newly started failing
//! - [`raw`] - history pages as the hosting service returns them

mod notification;
pub mod raw;
mod snapshot;
mod status;

pub use notification::Notification;
pub use raw::{HistoryPage, RawCommit, RawContext};
pub use snapshot::{Snapshot, SnapshotError};
pub use status::{CheckStatus, CommitRecord};
