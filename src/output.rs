//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Notification;
use crate::core::services::RunOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a polling run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// `owner/repo`
    pub repository: String,
    /// Commits in the fetched snapshot
    pub commits_checked: usize,
    /// Whether the snapshot changed since the previous run
    pub changed: bool,
    /// Notifications sent
    pub notifications: Vec<Notification>,
    /// Snapshot file path
    pub statuses_file: String,
    /// Whether the snapshot was committed and pushed
    pub pushed: bool,
    /// When the run finished (RFC3339)
    pub checked_at: String,
}

impl RunReport {
    /// Build a report for a finished run
    #[must_use]
    pub fn new(repository: String, statuses_file: String, outcome: RunOutcome) -> Self {
        Self {
            repository,
            commits_checked: outcome.commits_checked,
            changed: outcome.changed,
            notifications: outcome.notifications,
            statuses_file,
            pushed: outcome.published,
            checked_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable summary
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Checked {} commit(s) on {}",
            self.commits_checked, self.repository
        )];

        if !self.changed {
            lines.push("No status changes.".to_string());
            return lines.join("\n");
        }

        if self.notifications.is_empty() {
            lines.push("No new failures.".to_string());
        } else {
            lines.push(format!("{} new failure(s):", self.notifications.len()));
            for n in &self.notifications {
                let oid = n.oid.get(..7).unwrap_or(n.oid.as_str());
                lines.push(format!(
                    "  {} {} {}",
                    "FAILED".red().bold(),
                    n.check_name,
                    oid.dimmed()
                ));
            }
        }

        lines.push(format!("Updated {}", self.statuses_file));
        if self.pushed {
            lines.push("Pushed snapshot.".to_string());
        }
        lines.join("\n")
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn render_human(&self) {
        println!("{}", self.to_human());
    }

    fn render_json(&self) -> anyhow::Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }
}
