//! Error types for the DND monitor.

use thiserror::Error;

/// Errors that can occur when starting the monitor.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// `start` was called outside a tokio runtime.
    #[error("DND monitoring needs a running tokio runtime")]
    NoRuntime,
}
