//! Inert watcher used when the configuration cannot watch anything

use crate::error::Result;
use crate::ListenCloser;
use async_trait::async_trait;

/// Watcher that never watches: `listen` returns at once, `close` always succeeds
#[derive(Debug, Default, Clone, Copy)]
pub struct NopWatcher;

#[async_trait]
impl ListenCloser for NopWatcher {
    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn listen(&self) {}

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
