//! Option constructors for [`crate::new`]
//!
//! Each function returns a [`WatchOption`] that sets one field of the
//! [`Configuration`]. Options are applied in the order given, so a later
//! option for the same field replaces an earlier one.

use crate::config::Configuration;
use crate::context::Context;
use crate::logger::Logger;
use chrono::TimeDelta;
use std::sync::Arc;
use std::time::Duration;

/// A single configuration mutation
pub type WatchOption = Box<dyn FnOnce(&mut Configuration) + Send>;

/// Parent cancellation context; cancelling it stops the watcher
pub fn context(value: Context) -> WatchOption {
    Box::new(move |config| config.context = value)
}

/// Files to watch, in check order
///
/// Each path is trimmed; paths that are empty after trimming are dropped.
/// Duplicates are watched as independent slots.
pub fn filenames<I, S>(values: I) -> WatchOption
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filenames: Vec<String> = values
        .into_iter()
        .map(|value| value.as_ref().trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();

    Box::new(move |config| config.filenames = filenames)
}

/// Poll interval; a negative value disables the watcher
pub fn interval(value: TimeDelta) -> WatchOption {
    Box::new(move |config| config.interval = value)
}

/// Poll interval from a std duration (saturates at the largest interval)
pub fn interval_std(value: Duration) -> WatchOption {
    interval(TimeDelta::from_std(value).unwrap_or(TimeDelta::MAX))
}

/// Callback run once for every check cycle that saw a modification
pub fn notify<F>(value: F) -> WatchOption
where
    F: Fn() + Send + Sync + 'static,
{
    let value: Arc<dyn Fn() + Send + Sync> = Arc::new(value);
    Box::new(move |config| config.notify = value)
}

/// Destination for modification log lines
pub fn logger(value: Arc<dyn Logger>) -> WatchOption {
    Box::new(move |config| config.logger = value)
}
