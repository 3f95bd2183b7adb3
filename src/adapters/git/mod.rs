//! Git integration adapter
//!
//! Implements `VersionControl` using git commands, and locates the
//! repository root with `git2`.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};
use serde::Deserialize;

use crate::core::ports::VersionControl;

/// Author identity used for snapshot commits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BotIdentity {
    /// `user.name`
    pub name: String,
    /// `user.email`
    pub email: String,
}

impl Default for BotIdentity {
    fn default() -> Self {
        Self {
            name: "tvm-bot".to_string(),
            email: "95660001+tvm-bot@users.noreply.github.com".to_string(),
        }
    }
}

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
    /// Committer identity
    identity: BotIdentity,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf, identity: BotIdentity) -> Self {
        Self { workdir, identity }
    }

    /// Run a git command in the working directory, returning stdout
    fn git(&self, args: &[&str]) -> anyhow::Result<String> {
        debug!("git {}", args.join(" "));
        let output = Command::new("git").current_dir(&self.workdir).args(args).output()?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VersionControl for GitVersionControl {
    fn publish(&self, file: &Path, message: &str) -> anyhow::Result<()> {
        let file = file.to_string_lossy();
        self.git(&["add", &*file])?;
        self.git(&["config", "user.email", self.identity.email.as_str()])?;
        self.git(&["config", "user.name", self.identity.name.as_str()])?;
        self.git(&["commit", "-m", message])?;
        self.git(&["push"])?;
        info!("Pushed {file} as {}", self.identity.name);
        Ok(())
    }
}

/// Root of the working tree containing `start`, if any
#[must_use]
pub fn discover_root(start: &Path) -> Option<PathBuf> {
    let repo = git2::Repository::discover(start).ok()?;
    repo.workdir().map(Path::to_path_buf)
}
