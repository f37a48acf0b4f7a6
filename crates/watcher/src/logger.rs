//! Logging sinks for watch notifications
//!
//! The watcher reports detected modifications through a [`Logger`] so that
//! embedding applications decide where those lines go. Lifecycle details are
//! always emitted through `tracing` regardless of the configured logger.

use parking_lot::Mutex;
use std::fmt;

/// Printf-style sink for watcher log lines
pub trait Logger: Send + Sync {
    /// Write one formatted line
    fn printf(&self, args: fmt::Arguments<'_>);
}

/// Logger that discards all output
#[derive(Debug, Default, Clone, Copy)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn printf(&self, _args: fmt::Arguments<'_>) {}
}

/// Logger that forwards every line to `tracing` at INFO level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: "filewatcher", "{}", args);
    }
}

/// Logger that keeps every line in memory
///
/// Handy when an application wants to surface recent watcher activity
/// itself, and for asserting on output in tests.
#[derive(Debug, Default)]
pub struct BufferLogger {
    lines: Mutex<Vec<String>>,
}

impl BufferLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return all buffered lines
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Logger for BufferLogger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.lines.lock().push(args.to_string());
    }
}
