//! Print the effective watch configuration

use super::{build_options, WatchArgs};
use anyhow::Result;
use filewatcher::{Configuration, PollingWatcher};
use owo_colors::OwoColorize;

pub fn run(args: &WatchArgs) -> Result<()> {
    let config = Configuration::build(build_options(args)?);

    println!("{}", "Watch Configuration".bold());
    println!(
        "  {} = {}ms",
        "interval".cyan(),
        config.interval().num_milliseconds()
    );

    println!("  {}:", "files".cyan());
    if config.filenames().is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for filename in config.filenames() {
        let status = if std::path::Path::new(filename).exists() {
            "present".green().to_string()
        } else {
            "missing".yellow().to_string()
        };
        println!("    {} {}", filename, status);
    }

    if let Some(exec) = &args.exec {
        println!("  {} = {}", "exec".cyan(), exec);
    }

    let state = if PollingWatcher::new(config).is_some() {
        "active".green().bold().to_string()
    } else {
        "disabled (no files or negative interval)".red().bold().to_string()
    };
    println!("\n{}: {}", "Watcher".bold(), state);

    Ok(())
}
