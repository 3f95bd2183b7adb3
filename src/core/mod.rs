//! Core polling logic
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (CheckStatus, CommitRecord, Snapshot, Notification)
//! - `services/` - Normalizing, diffing, fetching and run orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
