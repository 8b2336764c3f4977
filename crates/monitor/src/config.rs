//! Monitor configuration and the settings collaborator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Settings key holding the "monitor DND" switch.
pub const MONITOR_DND_KEY: &str = "monitorDnd";

/// Default interval between DND samples.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default upper bound for one DND query; a slower query reads as inactive.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Polling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Milliseconds between samples.
    pub poll_interval_ms: u64,

    /// Milliseconds a single query may take.
    pub query_timeout_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            query_timeout_ms: DEFAULT_QUERY_TIMEOUT.as_millis() as u64,
        }
    }
}

impl MonitorConfig {
    /// Zero is clamped to one millisecond; `tokio::time::interval` rejects zero.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    /// Zero falls back to [`DEFAULT_QUERY_TIMEOUT`].
    pub fn query_timeout(&self) -> Duration {
        match self.query_timeout_ms {
            0 => DEFAULT_QUERY_TIMEOUT,
            ms => Duration::from_millis(ms),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn with_query_timeout(mut self, limit: Duration) -> Self {
        self.query_timeout_ms = limit.as_millis() as u64;
        self
    }
}

/// Read access to the host application's settings.
pub trait SettingsStore: Send + Sync {
    /// Boolean value for `key`, or `None` when unset or not a boolean.
    fn get_bool(&self, key: &str) -> Option<bool>;
}

impl SettingsStore for HashMap<String, bool> {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).copied()
    }
}

impl SettingsStore for serde_json::Value {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(serde_json::Value::as_bool)
    }
}

/// Whether `settings` asks for DND monitoring; unset means no.
pub fn monitor_enabled(settings: &dyn SettingsStore) -> bool {
    settings.get_bool(MONITOR_DND_KEY).unwrap_or(false)
}
