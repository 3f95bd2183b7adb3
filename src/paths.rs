//! Centralized path definitions
//!
//! ## Storage Layout
//!
//! ### Per-Project (Repository Root)
//!
//! ```text
//! repo/
//! └── statuses.json             # Last observed snapshot, optionally committed
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/ping-on-failure/
//! └── config.toml               # Optional settings
//! ```

use std::path::{Path, PathBuf};

use crate::adapters::{STATUSES_FILE, discover_root};

/// Global config directory name
const GLOBAL_DIR: &str = "ping-on-failure";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global config directory.
///
/// Falls back to `~/.config` when the platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the repository root containing `start`.
///
/// Outside a git repository this is `start` itself.
#[must_use]
pub fn project_root(start: &Path) -> PathBuf {
    discover_root(start).unwrap_or_else(|| start.to_path_buf())
}

/// Get the default snapshot path: `statuses.json` at the repository root.
#[must_use]
pub fn statuses_file(start: &Path) -> PathBuf {
    project_root(start).join(STATUSES_FILE)
}
