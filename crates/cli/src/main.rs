//! fwatch - run a command whenever watched files change

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;

/// Poll files for modification and react to changes
#[derive(Parser)]
#[command(name = "fwatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch files until interrupted
    Watch(cmd::WatchArgs),
    /// Print the effective watch configuration without watching
    Show(cmd::WatchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Watch(args) => cmd::watch::run(args).await,
        Commands::Show(args) => cmd::show::run(&args),
    }
}
