//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. I/O only
//! happens through the port traits handed in by the caller.
//!
//! - [`normalizer`] - Unify legacy statuses and check runs
//! - [`diff`] - Decide which checks newly started failing
//! - [`fetcher`] - Paginate default-branch history into a snapshot
//! - [`poller`] - Run the whole fetch/notify/persist cycle

pub mod diff;
pub mod fetcher;
pub mod normalizer;
pub mod poller;

pub use diff::{diff_snapshots, is_failure};
pub use fetcher::{DEFAULT_MAX_COMMITS, PAGE_SIZE, fetch_snapshot};
pub use normalizer::normalize_commit;
pub use poller::{Poller, RunOutcome};
