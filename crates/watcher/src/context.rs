//! Cooperative cancellation for the watch loop
//!
//! A watcher's context is a [`CancellationToken`]. The watcher derives a
//! child token from the one it was configured with, so cancelling the
//! caller's token stops the watcher while `close()` never reaches upward.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Cancellation context shared between a caller and its watchers
pub type Context = CancellationToken;

/// Context that is never cancelled unless a child derived from it is
pub fn background() -> Context {
    CancellationToken::new()
}

/// Outcome of a single wait between check cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// The full interval passed without cancellation
    Elapsed,
    /// The context was cancelled (explicitly or by its parent)
    Cancelled,
}

/// Wait for `interval` or until `context` is cancelled, whichever is first.
///
/// Cancellation wins ties, so a zero interval still observes a cancelled
/// context on every call.
pub async fn sleep(context: &Context, interval: Duration) -> Wake {
    tokio::select! {
        biased;
        _ = context.cancelled() => Wake::Cancelled,
        _ = tokio::time::sleep(interval) => Wake::Elapsed,
    }
}
