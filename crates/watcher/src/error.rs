//! Error types for the watcher crate
//!
//! Watching itself never fails: bad configuration degrades to a no-op
//! watcher and unreadable files are simply retried. Only loading settings
//! from disk can produce an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the watcher crate
#[derive(Debug, Error)]
pub enum WatchError {
    /// Settings file could not be read
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`crate::WatchSettings`]
    #[error("invalid watch settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for watcher operations
pub type Result<T> = std::result::Result<T, WatchError>;
