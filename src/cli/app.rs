//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands;
use ping_on_failure::config::Overrides;
use ping_on_failure::output::OutputMode;

/// ping-on-failure - Ping a chat channel when CI jobs start failing
#[derive(Parser, Debug)]
#[command(
    name = "ping-on-failure",
    version,
    about = "Ping a chat channel when CI jobs start failing",
    long_about = "Check the status checks of the newest commits on a repository's default \
                  branch and post one chat message per job that newly failed.\n\n\
                  The last observed statuses are kept in statuses.json so each failure \
                  is reported once.\n\n\
                  Requires GITHUB_TOKEN and DISCORD_WEBHOOK in the environment."
)]
pub struct Cli {
    /// GitHub repository owner [default: apache]
    #[arg(long, value_name = "OWNER")]
    pub user: Option<String>,

    /// GitHub repository name [default: tvm]
    #[arg(long, value_name = "NAME")]
    pub repo: Option<String>,

    /// Commit and push the updated statuses file
    #[arg(long)]
    pub push: bool,

    /// Previous statuses as inline JSON, used instead of the statuses file
    #[arg(long, value_name = "JSON")]
    pub statuses: Option<String>,

    /// Statuses file [default: <repo root>/statuses.json]
    #[arg(long, value_name = "PATH")]
    pub statuses_file: Option<PathBuf>,

    /// Maximum number of commits to check [default: 10]
    #[arg(long, value_name = "N")]
    pub max_commits: Option<usize>,

    /// Settings file [default: ~/.config/ping-on-failure/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let overrides = Overrides {
        owner: cli.user,
        repo: cli.repo,
        max_commits: cli.max_commits,
        statuses_path: cli.statuses_file,
        push: cli.push,
    };

    commands::poll(overrides, cli.statuses.as_deref(), cli.config.as_deref(), output_mode)
}
