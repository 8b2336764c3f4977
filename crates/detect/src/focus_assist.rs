//! Windows focus-assist profile decoding.
//!
//! Portable so the decision rule is testable off Windows.

/// Focus-assist profile as stored in the WNF quiet-hours state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAssistProfile {
    /// The query failed or the OS has no focus assist.
    Unsupported,
    Off,
    PriorityOnly,
    AlarmsOnly,
    /// A profile value newer builds may add.
    Other(u32),
}

impl FocusAssistProfile {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => FocusAssistProfile::Off,
            1 => FocusAssistProfile::PriorityOnly,
            2 => FocusAssistProfile::AlarmsOnly,
            other => FocusAssistProfile::Other(other),
        }
    }

    /// Anything but "off" and "unsupported" suppresses notifications.
    pub fn is_suppressing(&self) -> bool {
        !matches!(self, FocusAssistProfile::Unsupported | FocusAssistProfile::Off)
    }
}

/// Windows rule: quiet hours, or any suppressing focus-assist profile.
pub fn windows_dnd_active(quiet_hours: bool, profile: FocusAssistProfile) -> bool {
    quiet_hours || profile.is_suppressing()
}
