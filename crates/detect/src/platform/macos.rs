//! macOS Focus detection through the Control Center preferences.

use super::{focus_modes_visible, MACOS_CONTROL_CENTER_DOMAIN, MACOS_FOCUS_MODES_KEY};
use crate::command::{read_command_output, DEFAULT_COMMAND_TIMEOUT};
use std::time::Duration;

/// Reads whether a Focus mode status item is visible via `defaults`.
#[derive(Debug)]
pub struct MacOSProbe {
    command_timeout: Duration,
}

impl Default for MacOSProbe {
    fn default() -> Self {
        Self {
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }
}

impl MacOSProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_dnd_active(&self) -> bool {
        // A missing key makes `defaults` exit non-zero; that reads as "off".
        read_command_output(
            "defaults",
            &["read", MACOS_CONTROL_CENTER_DOMAIN, MACOS_FOCUS_MODES_KEY],
            self.command_timeout,
        )
        .await
        .map(|stdout| focus_modes_visible(&stdout))
        .unwrap_or(false)
    }
}
