//! Configuration management
//!
//! A run is configured from three layers, highest precedence first:
//! command-line flags, environment variables, and an optional TOML settings
//! file at `~/.config/ping-on-failure/config.toml`. Everything resolves into
//! one [`Config`] value that is handed to the components explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::{BotIdentity, DEFAULT_GRAPHQL_URL};
use crate::core::services::DEFAULT_MAX_COMMITS;
use crate::paths;

/// API token for the hosting service
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Chat webhook url
pub const DISCORD_WEBHOOK_ENV: &str = "DISCORD_WEBHOOK";
/// Optional GraphQL endpoint override
pub const GRAPHQL_URL_ENV: &str = "GITHUB_GRAPHQL_URL";

/// Default repository owner
pub const DEFAULT_OWNER: &str = "apache";
/// Default repository name
pub const DEFAULT_REPO: &str = "tvm";

/// Errors resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// A value is out of range
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Offending setting
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Settings file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`Settings`]
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the optional settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Repository owner
    #[serde(default)]
    pub owner: Option<String>,
    /// Repository name
    #[serde(default)]
    pub repo: Option<String>,
    /// Maximum commits checked per run
    #[serde(default)]
    pub max_commits: Option<usize>,
    /// Snapshot file; relative paths are taken from the repository root
    #[serde(default)]
    pub statuses_path: Option<PathBuf>,
    /// GraphQL endpoint
    #[serde(default)]
    pub graphql_url: Option<String>,
    /// Identity used when pushing the snapshot
    #[serde(default)]
    pub bot: BotIdentity,
}

impl Settings {
    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else the global settings file if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let path = paths::global_config();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Values taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--user`
    pub owner: Option<String>,
    /// `--repo`
    pub repo: Option<String>,
    /// `--max-commits`
    pub max_commits: Option<usize>,
    /// `--statuses-file`
    pub statuses_path: Option<PathBuf>,
    /// `--push`
    pub push: bool,
}

/// Fully resolved run configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// API token
    pub github_token: String,
    /// Webhook url
    pub discord_webhook: String,
    /// GraphQL endpoint
    pub graphql_url: String,
    /// Maximum commits checked per run
    pub max_commits: usize,
    /// Snapshot file
    pub statuses_path: PathBuf,
    /// Commit and push the snapshot after writing it
    pub push: bool,
    /// Identity for snapshot commits
    pub bot: BotIdentity,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("github_token", &"<redacted>")
            .field("discord_webhook", &"<redacted>")
            .field("graphql_url", &self.graphql_url)
            .field("max_commits", &self.max_commits)
            .field("statuses_path", &self.statuses_path)
            .field("push", &self.push)
            .field("bot", &self.bot)
            .finish()
    }
}

impl Config {
    /// Merge all layers
    ///
    /// `cwd` anchors the default snapshot location; `env` looks up
    /// environment variables.
    pub fn resolve<F>(
        settings: Settings,
        overrides: Overrides,
        cwd: &Path,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            env(name).filter(|v| !v.trim().is_empty()).ok_or(ConfigError::MissingEnv(name))
        };
        let github_token = required(GITHUB_TOKEN_ENV)?;
        let discord_webhook = required(DISCORD_WEBHOOK_ENV)?;

        let max_commits = overrides
            .max_commits
            .or(settings.max_commits)
            .unwrap_or(DEFAULT_MAX_COMMITS);
        if max_commits == 0 {
            return Err(ConfigError::Invalid {
                field: "max_commits",
                reason: "must be at least 1".to_string(),
            });
        }

        let statuses_path = match (overrides.statuses_path, settings.statuses_path) {
            (Some(path), _) => cwd.join(path),
            (None, Some(path)) => paths::project_root(cwd).join(path),
            (None, None) => paths::statuses_file(cwd),
        };

        let graphql_url = env(GRAPHQL_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .or(settings.graphql_url)
            .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());

        Ok(Self {
            owner: overrides.owner.or(settings.owner).unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            repo: overrides.repo.or(settings.repo).unwrap_or_else(|| DEFAULT_REPO.to_string()),
            github_token,
            discord_webhook,
            graphql_url,
            max_commits,
            statuses_path,
            push: overrides.push,
            bot: settings.bot,
        })
    }

    /// Merge all layers using the process environment
    pub fn from_env(
        settings: Settings,
        overrides: Overrides,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        Self::resolve(settings, overrides, cwd, |name| std::env::var(name).ok())
    }
}
