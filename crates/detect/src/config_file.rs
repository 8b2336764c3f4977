//! Boolean flags from `key=value` dotfiles.
//!
//! Used by desktops that only expose DND through a config file.

use std::path::{Path, PathBuf};

/// Key holding the LXQt notification daemon's DND switch.
pub const LXQT_DND_KEY: &str = "doNotDisturb";

/// `~/.config/lxqt/notifications.conf`, or `None` without a home directory.
pub fn lxqt_notifications_config() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lxqt").join("notifications.conf"))
}

/// Read `key` from the file at `path` as a boolean.
///
/// Missing or unreadable files and missing keys all read as `false`.
pub async fn read_bool_flag(path: &Path, key: &str) -> bool {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => parse_bool_flag(&contents, key),
        Err(_) => false,
    }
}

/// The first line whose trimmed key equals `key` decides the result.
pub fn parse_bool_flag(contents: &str, key: &str) -> bool {
    contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .is_some_and(|(_, value)| value.trim().eq_ignore_ascii_case("true"))
}
