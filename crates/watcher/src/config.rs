//! Watcher configuration
//!
//! A [`Configuration`] is assembled once from a list of [`WatchOption`]s
//! applied in order over the defaults, then handed to [`crate::new`].
//! Nothing is validated here; the factory decides whether the result is
//! usable and falls back to a no-op watcher when it is not.

use crate::context::{self, Context};
use crate::error::{Result, WatchError};
use crate::logger::{Logger, NopLogger};
use crate::options::{self, WatchOption};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Callback invoked once per check cycle that observed a modification
pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Default poll interval in milliseconds (one hour)
pub const DEFAULT_INTERVAL_MS: i64 = 60 * 60 * 1000;

/// Immutable watcher configuration
#[derive(Clone)]
pub struct Configuration {
    pub(crate) context: Context,
    pub(crate) filenames: Vec<String>,
    pub(crate) interval: TimeDelta,
    pub(crate) notify: Notify,
    pub(crate) logger: Arc<dyn Logger>,
}

impl Configuration {
    /// Apply `options` in order on top of the defaults
    pub fn build<I>(options: I) -> Self
    where
        I: IntoIterator<Item = WatchOption>,
    {
        let mut config = Self {
            context: context::background(),
            filenames: Vec::new(),
            interval: TimeDelta::milliseconds(DEFAULT_INTERVAL_MS),
            notify: Arc::new(|| {}),
            logger: Arc::new(NopLogger),
        };

        for option in options {
            option(&mut config);
        }

        config
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Trimmed, non-empty paths in the order they were supplied
    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Poll interval; may be zero or negative
    pub fn interval(&self) -> TimeDelta {
        self.interval
    }

    pub fn notify(&self) -> &Notify {
        &self.notify
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::build(std::iter::empty())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("cancelled", &self.context.is_cancelled())
            .field("filenames", &self.filenames)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

/// Watch settings as stored in a TOML file
///
/// ```toml
/// files = ["config/app.toml", "config/secrets.toml"]
/// interval_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSettings {
    /// Files to watch
    pub files: Vec<String>,

    /// Poll interval in milliseconds (negative disables watching)
    pub interval_ms: i64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl WatchSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| WatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Equivalent option list, for use ahead of any caller overrides
    pub fn into_options(self) -> Vec<WatchOption> {
        vec![
            options::filenames(self.files),
            options::interval(interval_from_millis(self.interval_ms)),
        ]
    }
}

/// Millisecond count as an interval, saturating at the representable range
fn interval_from_millis(millis: i64) -> TimeDelta {
    TimeDelta::try_milliseconds(millis).unwrap_or(if millis < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    })
}
