//! Platform-specific DND strategies.
//!
//! One variant per supported OS, chosen once at startup by [`DndProbe::detect`].

use crate::provider::DndSource;
use async_trait::async_trait;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
pub use linux::LinuxProbe;
#[cfg(target_os = "macos")]
pub use macos::MacOSProbe;
#[cfg(target_os = "windows")]
pub use windows::WindowsProbe;

/// Preference domain holding the menu bar status items.
pub const MACOS_CONTROL_CENTER_DOMAIN: &str = "com.apple.controlcenter";

/// Present and set to 1 while a Focus mode shows its menu bar item.
pub const MACOS_FOCUS_MODES_KEY: &str = "NSStatusItem Visible FocusModes";

/// Interpret `defaults read` output for [`MACOS_FOCUS_MODES_KEY`].
pub fn focus_modes_visible(stdout: &str) -> bool {
    crate::command::alphanumeric_only(stdout) == "1"
}

/// The DND strategy for the running platform.
#[derive(Debug)]
pub enum DndProbe {
    #[cfg(target_os = "windows")]
    Windows(WindowsProbe),
    #[cfg(target_os = "macos")]
    MacOS(MacOSProbe),
    #[cfg(target_os = "linux")]
    Linux(LinuxProbe),
    /// No known DND signal; always inactive.
    Unsupported,
}

impl DndProbe {
    /// Pick the strategy for the current OS.
    pub fn detect() -> Self {
        #[cfg(target_os = "windows")]
        {
            DndProbe::Windows(WindowsProbe::new())
        }
        #[cfg(target_os = "macos")]
        {
            DndProbe::MacOS(MacOSProbe::new())
        }
        #[cfg(target_os = "linux")]
        {
            DndProbe::Linux(LinuxProbe::new())
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            DndProbe::Unsupported
        }
    }
}

impl Default for DndProbe {
    fn default() -> Self {
        Self::detect()
    }
}

#[async_trait]
impl DndSource for DndProbe {
    async fn is_dnd_active(&self) -> bool {
        match self {
            #[cfg(target_os = "windows")]
            DndProbe::Windows(probe) => probe.is_dnd_active().await,
            #[cfg(target_os = "macos")]
            DndProbe::MacOS(probe) => probe.is_dnd_active().await,
            #[cfg(target_os = "linux")]
            DndProbe::Linux(probe) => probe.is_dnd_active().await,
            DndProbe::Unsupported => false,
        }
    }

    fn describe(&self) {
        match self {
            #[cfg(target_os = "windows")]
            DndProbe::Windows(_) => {}
            #[cfg(target_os = "macos")]
            DndProbe::MacOS(_) => {}
            #[cfg(target_os = "linux")]
            DndProbe::Linux(probe) => probe.describe(),
            DndProbe::Unsupported => {
                tracing::info!("no Do Not Disturb signal on this platform");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_modes_visible() {
        assert!(focus_modes_visible("1\n"));
        assert!(!focus_modes_visible("0\n"));
        assert!(!focus_modes_visible(""));
        assert!(!focus_modes_visible("10\n"));
    }

    #[tokio::test]
    async fn test_unsupported_probe_is_inactive() {
        assert!(!DndProbe::Unsupported.is_dnd_active().await);
    }
}
