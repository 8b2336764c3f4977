//! Linux DND detection, one strategy per desktop environment.

use crate::command::{read_command_output, DEFAULT_COMMAND_TIMEOUT};
use crate::config_file::{lxqt_notifications_config, read_bool_flag, LXQT_DND_KEY};
use crate::desktop::{
    resolve_desktop_environment, DesktopEnvironmentId, DesktopKind, GsettingsQuery,
    CINNAMON_DISPLAY_NOTIFICATIONS, GNOME_SHOW_BANNERS, MATE_DO_NOT_DISTURB,
};
use crate::error::ProbeResult;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::OnceCell;
use zbus::zvariant::OwnedValue;
use zbus::{connection, Connection, Proxy};

const NOTIFICATIONS_SERVICE: &str = "org.freedesktop.Notifications";
const NOTIFICATIONS_PATH: &str = "/org/freedesktop/Notifications";
const PROPERTIES_INTERFACE: &str = "org.freedesktop.DBus.Properties";

const XFCONF_SERVICE: &str = "org.xfce.Xfconf";
const XFCONF_PATH: &str = "/org/xfce/Xfconf";
const XFCE_NOTIFYD_CHANNEL: &str = "xfce4-notifyd";
const XFCE_DND_PROPERTY: &str = "/do-not-disturb";

const GSETTINGS_PROGRAM: &str = "gsettings";

/// DND probe for the desktop environment resolved at construction.
#[derive(Debug)]
pub struct LinuxProbe {
    desktop: DesktopEnvironmentId,
    kind: DesktopKind,
    lxqt_config: Option<PathBuf>,
    gsettings_program: String,
    command_timeout: Duration,
    /// Session bus address; `None` uses the one from the environment.
    bus_address: Option<String>,
    /// Opened on first use by KDE/XFCE and reused afterwards.
    session_bus: OnceCell<Connection>,
    unsupported_notice_shown: AtomicBool,
}

impl Default for LinuxProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl LinuxProbe {
    /// Probe for the desktop named by the process environment.
    pub fn new() -> Self {
        Self::with_desktop(resolve_desktop_environment())
    }

    pub fn with_desktop(desktop: DesktopEnvironmentId) -> Self {
        let kind = DesktopKind::classify(&desktop);
        Self {
            desktop,
            kind,
            lxqt_config: lxqt_notifications_config(),
            gsettings_program: GSETTINGS_PROGRAM.to_string(),
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            bus_address: None,
            session_bus: OnceCell::new(),
            unsupported_notice_shown: AtomicBool::new(false),
        }
    }

    /// Read the LXQt flag from `path` instead of the user config directory.
    pub fn with_lxqt_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.lxqt_config = Some(path.into());
        self
    }

    /// Run `program` instead of `gsettings` for settings-backed desktops.
    pub fn with_gsettings_program(mut self, program: impl Into<String>) -> Self {
        self.gsettings_program = program.into();
        self
    }

    /// Connect to the bus at `address` instead of the session bus.
    pub fn with_session_bus_address(mut self, address: impl Into<String>) -> Self {
        self.bus_address = Some(address.into());
        self
    }

    pub fn with_command_timeout(mut self, limit: Duration) -> Self {
        self.command_timeout = limit;
        self
    }

    pub fn desktop(&self) -> &DesktopEnvironmentId {
        &self.desktop
    }

    pub fn kind(&self) -> DesktopKind {
        self.kind
    }

    pub fn unsupported_notice_shown(&self) -> bool {
        self.unsupported_notice_shown.load(Ordering::SeqCst)
    }

    pub fn describe(&self) {
        tracing::info!(desktop = %self.desktop, kind = ?self.kind, "desktop environment detected");
    }

    pub async fn is_dnd_active(&self) -> bool {
        let result = match self.kind {
            DesktopKind::Kde => self.kde_inhibited().await,
            DesktopKind::Xfce => self.xfce_do_not_disturb().await,
            DesktopKind::Gnome => self.gsettings(&GNOME_SHOW_BANNERS).await,
            DesktopKind::Cinnamon => self.gsettings(&CINNAMON_DISPLAY_NOTIFICATIONS).await,
            DesktopKind::Mate => self.gsettings(&MATE_DO_NOT_DISTURB).await,
            DesktopKind::Lxqt => Ok(self.lxqt_do_not_disturb().await),
            DesktopKind::Unsupported => {
                self.note_unsupported();
                Ok(false)
            }
        };

        result.unwrap_or(false)
    }

    async fn session_bus(&self) -> ProbeResult<&Connection> {
        let connection = self
            .session_bus
            .get_or_try_init(|| connect(self.bus_address.as_deref()))
            .await?;
        Ok(connection)
    }

    async fn kde_inhibited(&self) -> ProbeResult<bool> {
        let connection = self.session_bus().await?;
        let proxy = Proxy::new(
            connection,
            NOTIFICATIONS_SERVICE,
            NOTIFICATIONS_PATH,
            PROPERTIES_INTERFACE,
        )
        .await?;

        let inhibited: OwnedValue = proxy
            .call("Get", &(NOTIFICATIONS_SERVICE, "Inhibited"))
            .await?;
        Ok(bool::try_from(inhibited)?)
    }

    async fn xfce_do_not_disturb(&self) -> ProbeResult<bool> {
        let connection = self.session_bus().await?;
        let proxy = Proxy::new(connection, XFCONF_SERVICE, XFCONF_PATH, XFCONF_SERVICE).await?;

        let enabled: OwnedValue = proxy
            .call("GetProperty", &(XFCE_NOTIFYD_CHANNEL, XFCE_DND_PROPERTY))
            .await?;
        Ok(bool::try_from(enabled)?)
    }

    async fn gsettings(&self, query: &GsettingsQuery) -> ProbeResult<bool> {
        let stdout = read_command_output(
            &self.gsettings_program,
            &["get", query.schema, query.key],
            self.command_timeout,
        )
        .await?;
        Ok(query.is_active(&stdout))
    }

    async fn lxqt_do_not_disturb(&self) -> bool {
        match &self.lxqt_config {
            Some(path) => read_bool_flag(path, LXQT_DND_KEY).await,
            None => false,
        }
    }

    fn note_unsupported(&self) {
        if !self.unsupported_notice_shown.swap(true, Ordering::SeqCst) {
            tracing::info!(
                desktop = %self.desktop,
                "{} not supported for DND detection, yet",
                self.desktop
            );
        }
    }
}

async fn connect(address: Option<&str>) -> zbus::Result<Connection> {
    match address {
        Some(address) => connection::Builder::address(address)?.build().await,
        None => Connection::session().await,
    }
}
