//! CLI command implementations

pub mod show;
pub mod watch;

use anyhow::{Context, Result};
use clap::Args;
use filewatcher::{WatchOption, WatchSettings};
use std::path::PathBuf;

/// Arguments shared by commands that describe a watch set
#[derive(Args, Debug, Clone, Default)]
pub struct WatchArgs {
    /// Files to watch (appended to any files from --config)
    pub files: Vec<String>,

    /// Poll interval in milliseconds; negative disables watching
    #[arg(short, long, allow_hyphen_values = true)]
    pub interval_ms: Option<i64>,

    /// TOML settings file with `files` and `interval_ms`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Shell command to run after each detected change
    #[arg(short, long)]
    pub exec: Option<String>,
}

/// Build watcher options: settings file first, command line on top
pub fn build_options(args: &WatchArgs) -> Result<Vec<WatchOption>> {
    let mut settings = match &args.config {
        Some(path) => WatchSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => WatchSettings::default(),
    };

    settings.files.extend(args.files.iter().cloned());
    if let Some(interval_ms) = args.interval_ms {
        settings.interval_ms = interval_ms;
    }

    Ok(settings.into_options())
}
