//! Desktop environment resolution and classification.
//!
//! Pure domain logic - reads the process environment, no other I/O.

use std::fmt;

/// Environment variable some launchers set to preserve the real desktop id
/// before overwriting `XDG_CURRENT_DESKTOP`.
pub const ORIGINAL_DESKTOP_VAR: &str = "ORIGINAL_XDG_CURRENT_DESKTOP";

/// Standard freedesktop variable naming the running desktop(s).
pub const CURRENT_DESKTOP_VAR: &str = "XDG_CURRENT_DESKTOP";

/// Token used when no desktop variable is set.
pub const UNKNOWN_DESKTOP: &str = "unknown";

/// Identifier of the running desktop environment, as reported by the
/// environment (e.g. "KDE", "GNOME:KDE", "ubuntu:GNOME").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DesktopEnvironmentId(String);

impl DesktopEnvironmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form used for matching.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_DESKTOP
    }
}

impl fmt::Display for DesktopEnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DesktopEnvironmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Resolve the desktop environment from the process environment.
pub fn resolve_desktop_environment() -> DesktopEnvironmentId {
    resolve_from(|name| std::env::var(name).ok())
}

/// Resolve the desktop environment using `lookup` to read variables.
///
/// The override variable wins over the standard one; empty values count as
/// unset.
pub fn resolve_from<F>(lookup: F) -> DesktopEnvironmentId
where
    F: Fn(&str) -> Option<String>,
{
    [ORIGINAL_DESKTOP_VAR, CURRENT_DESKTOP_VAR]
        .into_iter()
        .filter_map(&lookup)
        .find(|value| !value.is_empty())
        .map(DesktopEnvironmentId::new)
        .unwrap_or_else(|| DesktopEnvironmentId::new(UNKNOWN_DESKTOP))
}

/// Desktop environments with a known DND signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesktopKind {
    Kde,
    Xfce,
    /// GNOME and Unity share the GNOME notification schema.
    Gnome,
    Cinnamon,
    Mate,
    Lxqt,
    Unsupported,
}

impl DesktopKind {
    /// Classify a desktop id by substring, first match wins.
    ///
    /// Order matters: "GNOME:KDE" is KDE, "X-Cinnamon:GNOME" is GNOME.
    pub fn classify(id: &DesktopEnvironmentId) -> Self {
        let de = id.normalized();

        if de.contains("kde") {
            DesktopKind::Kde
        } else if de.contains("xfce") {
            DesktopKind::Xfce
        } else if de.contains("gnome") || de.contains("unity") {
            DesktopKind::Gnome
        } else if de.contains("cinnamon") {
            DesktopKind::Cinnamon
        } else if de.contains("mate") {
            DesktopKind::Mate
        } else if de.contains("lxqt") {
            DesktopKind::Lxqt
        } else {
            DesktopKind::Unsupported
        }
    }
}

/// A `gsettings get <schema> <key>` lookup and the value meaning "DND on".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GsettingsQuery {
    pub schema: &'static str,
    pub key: &'static str,
    pub active_value: &'static str,
}

impl GsettingsQuery {
    /// Interpret raw `gsettings` stdout such as `"'false'\n"`.
    pub fn is_active(&self, stdout: &str) -> bool {
        crate::command::alphanumeric_only(stdout) == self.active_value
    }
}

/// Banners hidden means DND.
pub const GNOME_SHOW_BANNERS: GsettingsQuery = GsettingsQuery {
    schema: "org.gnome.desktop.notifications",
    key: "show-banners",
    active_value: "false",
};

pub const CINNAMON_DISPLAY_NOTIFICATIONS: GsettingsQuery = GsettingsQuery {
    schema: "org.cinnamon.desktop.notifications",
    key: "display-notifications",
    active_value: "false",
};

/// MATE phrases the flag affirmatively.
pub const MATE_DO_NOT_DISTURB: GsettingsQuery = GsettingsQuery {
    schema: "org.mate.NotificationDaemon",
    key: "do-not-disturb",
    active_value: "true",
};
