//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - GraphQL history client
//! - `discord/` - Webhook notifier
//! - `file/` - JSON snapshot file
//! - `git/` - Commit and push of the snapshot file

pub mod discord;
pub mod file;
pub mod git;
pub mod github;

pub use discord::{DiscordWebhook, WebhookError};
pub use file::{JsonFileStore, STATUSES_FILE};
pub use git::{BotIdentity, GitVersionControl, discover_root};
pub use github::{DEFAULT_GRAPHQL_URL, GitHubClient, GitHubError};
