//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the polling logic
//! and external systems (hosting API, chat webhook, filesystem, git).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core logic depends only on these traits, never on concrete
//! implementations, so every service can be driven by in-memory fakes.

mod history;
mod notifier;
mod snapshot_store;
mod vcs;

pub use history::CommitHistory;
pub use notifier::Notifier;
pub use snapshot_store::SnapshotStore;
pub use vcs::VersionControl;
