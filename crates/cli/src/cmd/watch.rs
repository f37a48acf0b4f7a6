//! Watch files until interrupted

use super::{build_options, WatchArgs};
use anyhow::{Context, Result};
use filewatcher::{options, ListenCloser, TracingLogger};
use owo_colors::OwoColorize;
use std::process::Command;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn run(args: WatchArgs) -> Result<()> {
    let mut watch_options = build_options(&args)?;

    let (change_tx, change_rx) = mpsc::unbounded_channel();
    watch_options.push(options::logger(Arc::new(TracingLogger)));
    watch_options.push(options::notify(move || {
        // Receiver only goes away during shutdown
        let _ = change_tx.send(());
    }));

    let watcher = filewatcher::new(watch_options);
    let reactor = tokio::spawn(react_to_changes(change_rx, args.exec.clone()));

    let listener = watcher.clone();
    let mut listen_task = tokio::spawn(async move { listener.listen().await });

    tokio::select! {
        joined = &mut listen_task => {
            joined.context("Watcher task failed")?;
            warn!("Nothing to watch (no files given or negative interval)");
            return Ok(());
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            info!("Interrupted, stopping watcher");
            watcher.close()?;
        }
    }

    listen_task.await.context("Watcher task failed")?;
    reactor.abort();
    Ok(())
}

/// Report each change and run the configured command, one at a time
async fn react_to_changes(mut change_rx: mpsc::UnboundedReceiver<()>, exec: Option<String>) {
    let mut changes = 0u64;

    while change_rx.recv().await.is_some() {
        changes += 1;
        println!("{} change #{}", "Detected".green().bold(), changes);

        let Some(command) = exec.clone() else {
            continue;
        };

        match tokio::task::spawn_blocking(move || run_shell(&command)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Command failed: {:#}", e),
            Err(e) => warn!("Command task failed: {}", e),
        }
    }
}

fn run_shell(command: &str) -> Result<()> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .with_context(|| format!("Failed to spawn `{}`", command))?;

    if !status.success() {
        anyhow::bail!("`{}` exited with {}", command, status);
    }
    Ok(())
}
