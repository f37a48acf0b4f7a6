//! Polling file watcher
//!
//! This crate watches a fixed set of files by periodically comparing their
//! modification times, as a portable substitute for OS change notifications:
//! - One notification per poll cycle, however many files changed
//! - Missing or unreadable files are retried every cycle, never an error
//! - Cooperative cancellation through a [`Context`] token or `close()`
//! - Unusable configurations (no files, negative interval) degrade to a
//!   watcher that does nothing
//!
//! ```no_run
//! use chrono::TimeDelta;
//! use filewatcher::options;
//!
//! # async fn run() {
//! let watcher = filewatcher::new([
//!     options::filenames(["config/app.toml"]),
//!     options::interval(TimeDelta::seconds(2)),
//!     options::notify(|| println!("config changed")),
//! ]);
//!
//! let listener = watcher.clone();
//! let task = tokio::spawn(async move { listener.listen().await });
//! // ...
//! watcher.close().unwrap();
//! task.await.unwrap();
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod logger;
pub mod nop;
pub mod options;
pub mod polling;

use async_trait::async_trait;
use std::sync::Arc;

// Re-exports
pub use config::{Configuration, Notify, WatchSettings};
pub use context::Context;
pub use error::{Result, WatchError};
pub use logger::{BufferLogger, Logger, NopLogger, TracingLogger};
pub use nop::NopWatcher;
pub use options::WatchOption;
pub use polling::PollingWatcher;

/// Handle returned by [`new`]
///
/// `listen` must not be run by more than one caller at a time on the same
/// watcher. `close` may be called from anywhere, any number of times.
#[async_trait]
pub trait ListenCloser: Send + Sync {
    /// Record baseline modification times now instead of on first `listen`
    fn initialize(&self) -> Result<()>;

    /// Poll until the watcher is closed or its parent context is cancelled
    async fn listen(&self);

    /// Stop the watcher; `listen` returns at its next wait
    fn close(&self) -> Result<()>;

    /// Run [`listen`](ListenCloser::listen) to completion on the calling
    /// thread.
    ///
    /// Uses a single-threaded runtime, so it must not be called from within
    /// an async context.
    fn listen_blocking(&self) {
        match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime.block_on(self.listen()),
            Err(e) => tracing::warn!("Failed to start watcher runtime: {}", e),
        }
    }
}

/// Create a watcher from `options` applied over the defaults
pub fn new<I>(options: I) -> Arc<dyn ListenCloser>
where
    I: IntoIterator<Item = WatchOption>,
{
    from_config(Configuration::build(options))
}

/// Create a watcher from a prepared configuration
///
/// Returns a [`NopWatcher`] when the configuration lists no files or has a
/// negative interval.
pub fn from_config(config: Configuration) -> Arc<dyn ListenCloser> {
    match PollingWatcher::new(config) {
        Some(watcher) => Arc::new(watcher),
        None => {
            tracing::debug!("Nothing to watch; using no-op watcher");
            Arc::new(NopWatcher)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_configuration_is_inert() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let watcher = new([options::notify(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })]);

        tokio::time::timeout(Duration::from_millis(100), watcher.listen())
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        watcher.initialize().unwrap();
        watcher.close().unwrap();
        watcher.close().unwrap();
    }

    #[tokio::test]
    async fn test_negative_interval_is_inert() {
        let watcher = new([
            options::filenames(["Cargo.toml"]),
            options::interval(TimeDelta::milliseconds(-10)),
        ]);

        tokio::time::timeout(Duration::from_millis(100), watcher.listen())
            .await
            .unwrap();
    }

    #[test]
    fn test_nop_listen_blocking_returns() {
        let watcher = new([options::filenames(["   "])]);

        watcher.listen_blocking();
        watcher.close().unwrap();
        watcher.listen_blocking();
    }
}
