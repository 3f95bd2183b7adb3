//! Poll command - one fetch/diff/notify/persist run

use std::path::Path;

use anyhow::Context;
use log::debug;

use ping_on_failure::adapters::{DiscordWebhook, GitHubClient, GitVersionControl, JsonFileStore};
use ping_on_failure::config::{Config, Overrides, Settings};
use ping_on_failure::core::models::Snapshot;
use ping_on_failure::core::ports::SnapshotStore;
use ping_on_failure::core::services::Poller;
use ping_on_failure::output::{OutputMode, RunReport};

/// Check recent commits and notify about new failures
pub fn poll(
    overrides: Overrides,
    statuses: Option<&str>,
    settings_file: Option<&Path>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(settings_file)?;
    let config = Config::from_env(settings, overrides, &cwd)?;
    debug!("{config:?}");

    let previous = statuses
        .map(|json| Snapshot::from_override(json).context("Invalid --statuses JSON"))
        .transpose()?;

    let history =
        GitHubClient::new(&config.graphql_url, &config.github_token, &config.owner, &config.repo)?;
    let notifier = DiscordWebhook::new(&config.discord_webhook)?;
    let store = JsonFileStore::new(&config.statuses_path);
    let workdir = config.statuses_path.parent().unwrap_or(&cwd).to_path_buf();
    let git = GitVersionControl::new(workdir, config.bot.clone());

    let mut poller = Poller::new(&history, &notifier, &store, config.max_commits);
    if config.push {
        poller = poller.with_publisher(&git);
    }
    let outcome = poller.run(previous)?;

    RunReport::new(
        format!("{}/{}", config.owner, config.repo),
        store.path().display().to_string(),
        outcome,
    )
    .render(output_mode)
}
