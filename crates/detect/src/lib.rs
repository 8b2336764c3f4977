//! Do Not Disturb detection for dnd-watch.
//!
//! Each operating system exposes notification suppression differently:
//! - Windows: shell quiet time and the focus-assist WNF state
//! - macOS: the Control Center Focus status item preference
//! - Linux: one of six desktop-environment services or dotfiles
//!
//! All of them are reduced to one boolean behind [`DndSource`]. Failures never
//! escape a probe; an unanswerable query reads as "not in DND".
//!
//! # Example
//!
//! ```ignore
//! use dnd_detect::{DndProbe, DndSource};
//!
//! let probe = DndProbe::detect();
//! if probe.is_dnd_active().await {
//!     println!("notifications are suppressed");
//! }
//! ```

mod command;
mod config_file;
mod desktop;
mod error;
mod focus_assist;
mod provider;

pub mod platform;

pub use command::{alphanumeric_only, read_command_output, DEFAULT_COMMAND_TIMEOUT};
pub use config_file::{lxqt_notifications_config, parse_bool_flag, read_bool_flag, LXQT_DND_KEY};
pub use desktop::{
    resolve_desktop_environment, resolve_from, DesktopEnvironmentId, DesktopKind,
    GsettingsQuery, CINNAMON_DISPLAY_NOTIFICATIONS, CURRENT_DESKTOP_VAR, GNOME_SHOW_BANNERS,
    MATE_DO_NOT_DISTURB, ORIGINAL_DESKTOP_VAR, UNKNOWN_DESKTOP,
};
pub use error::{ProbeError, ProbeResult};
pub use focus_assist::{windows_dnd_active, FocusAssistProfile};
pub use platform::DndProbe;
pub use provider::{DndSource, NullSource};
