//! Error types for DND probes.
//!
//! These never leave the crate's public query surface: every strategy maps a
//! `ProbeError` to "not active" at its boundary.

use thiserror::Error;

/// Result type for probe internals.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors that can occur while querying a native DND signal.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Failed to spawn a helper process.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Helper process exited with a non-zero status.
    #[error("'{program}' exited with status {code:?}")]
    CommandFailed { program: String, code: Option<i32> },

    /// Helper process did not finish in time.
    #[error("'{program}' timed out")]
    Timeout { program: String },

    /// Helper process wrote something we could not decode.
    #[error("unreadable output: {0}")]
    InvalidOutput(String),

    /// Session bus call failed.
    #[cfg(target_os = "linux")]
    #[error("session bus error: {0}")]
    Bus(#[from] zbus::Error),

    /// Session bus reply carried an unexpected value type.
    #[cfg(target_os = "linux")]
    #[error("unexpected bus value: {0}")]
    Value(#[from] zbus::zvariant::Error),

    /// Win32 call failed.
    #[cfg(target_os = "windows")]
    #[error("win32 error: {0}")]
    Windows(#[from] windows::core::Error),

    /// Native call returned a failing NTSTATUS.
    #[error("native call failed with NTSTATUS {0:#x}")]
    Ntstatus(i32),

    /// The queried feature does not exist on this system.
    #[error("feature not supported on this system")]
    Unsupported,
}
