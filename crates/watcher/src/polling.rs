//! Polling watcher
//!
//! Periodically stats a fixed list of files and fires the notification
//! callback when any of them has a newer modification time than the last
//! one seen. Trades latency (bounded by the poll interval) for portability:
//! no platform notification API is involved.

use crate::config::{Configuration, Notify};
use crate::context::{self, Context, Wake};
use crate::error::Result;
use crate::logger::Logger;
use crate::ListenCloser;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, trace};

/// Active watcher created by [`crate::new`] for a usable configuration
pub struct PollingWatcher {
    /// Child of the configured context; cancelled by `close()`
    context: Context,

    /// Watched paths, in check order
    filenames: Vec<String>,

    interval: Duration,
    notify: Notify,
    logger: Arc<dyn Logger>,

    /// Last known modification time per slot, parallel to `filenames`
    known: Mutex<Known>,
}

struct Known {
    primed: bool,
    times: Vec<Option<SystemTime>>,
}

impl PollingWatcher {
    /// Build a watcher, or `None` when there is nothing to watch or the
    /// interval is negative.
    ///
    /// A zero interval is valid and polls back to back.
    pub fn new(config: Configuration) -> Option<Self> {
        if config.filenames.is_empty() {
            return None;
        }

        // Negative intervals fail the conversion
        let interval = config.interval.to_std().ok()?;

        let slots = config.filenames.len();
        Some(Self {
            context: config.context.child_token(),
            filenames: config.filenames,
            interval,
            notify: config.notify,
            logger: config.logger,
            known: Mutex::new(Known {
                primed: false,
                times: vec![None; slots],
            }),
        })
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the watcher has been closed or its parent context cancelled
    pub fn is_stopped(&self) -> bool {
        self.context.is_cancelled()
    }

    /// Record the current modification times as the baseline.
    ///
    /// Runs once per watcher; later calls are no-ops.
    fn prime(&self) {
        let mut known = self.known.lock();
        if known.primed {
            return;
        }

        for (slot, filename) in known.times.iter_mut().zip(&self.filenames) {
            *slot = last_modified(filename);
        }
        known.primed = true;

        debug!(
            files = self.filenames.len(),
            missing = known.times.iter().filter(|t| t.is_none()).count(),
            "Recorded baseline modification times"
        );
    }

    /// Check every watched file once.
    ///
    /// Returns true when at least one file has a modification time strictly
    /// later than the one last recorded for its slot. The caller notifies.
    pub fn update(&self) -> bool {
        let mut known = self.known.lock();
        let mut count = 0;

        for (index, filename) in self.filenames.iter().enumerate() {
            let Some(modified) = last_modified(filename) else {
                // Unreadable this cycle; keep whatever we knew
                continue;
            };

            let Some(previous) = known.times[index] else {
                // First sighting becomes the baseline, no notification
                trace!(path = %filename, "Watched file appeared");
                known.times[index] = Some(modified);
                continue;
            };

            if modified <= previous {
                continue;
            }

            count += 1;
            known.times[index] = Some(modified);
            self.logger.printf(format_args!(
                "[INFO] Watched file [{}] was modified on [{}].",
                filename,
                format_timestamp(modified)
            ));
        }

        if count == 0 {
            trace!("No watched files modified");
            return false;
        }

        self.logger.printf(format_args!(
            "[INFO] [{}] watched files modified, notifying subscribers...",
            count
        ));
        true
    }
}

#[async_trait]
impl ListenCloser for PollingWatcher {
    fn initialize(&self) -> Result<()> {
        self.prime();
        Ok(())
    }

    async fn listen(&self) {
        self.prime();

        debug!(
            files = self.filenames.len(),
            interval = ?self.interval,
            "Polling watcher listening"
        );

        while context::sleep(&self.context, self.interval).await == Wake::Elapsed {
            if self.update() {
                (self.notify)();
            }
        }

        debug!("Polling watcher stopped");
    }

    fn close(&self) -> Result<()> {
        self.context.cancel();
        Ok(())
    }
}

/// Modification time of `path`, or `None` if it cannot be stat'd
fn last_modified(path: &str) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S%.f %z")
        .to_string()
}
