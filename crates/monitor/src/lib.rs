//! Do Not Disturb monitoring for dnd-watch.
//!
//! Polls the platform DND signal once a second and broadcasts edge events:
//! [`DndEvent::Started`] when notifications become suppressed and
//! [`DndEvent::Finished`] when they are delivered again. Consumers such as a
//! reminder scheduler subscribe and hold back pop-ups in between.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  state.rs   - edge detection over samples (pure)            │
//! │  event.rs   - Started / Finished                            │
//! │  config.rs  - polling config, settings collaborator         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Infrastructure Layer                        │
//! │  dnd-detect - per-OS / per-desktop probes                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                          │
//! │  monitor.rs - poll task, start/stop, event channel          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dnd_monitor::{DndEvent, DndMonitor};
//! use serde_json::json;
//!
//! let monitor = DndMonitor::with_platform(&json!({ "monitorDnd": true }))?;
//! let mut events = monitor.subscribe();
//!
//! while let Ok(event) = events.recv().await {
//!     match event {
//!         DndEvent::Started => pause_reminders(),
//!         DndEvent::Finished => resume_reminders(),
//!     }
//! }
//! ```

mod config;
mod error;
mod event;
mod monitor;
mod state;

pub use config::{
    monitor_enabled, MonitorConfig, SettingsStore, DEFAULT_POLL_INTERVAL, DEFAULT_QUERY_TIMEOUT,
    MONITOR_DND_KEY,
};
pub use error::MonitorError;
pub use event::DndEvent;
pub use monitor::{DndMonitor, EVENT_CHANNEL_CAPACITY};
pub use state::DndState;

// Re-export the detection surface monitors are built from
pub use dnd_detect::{DndProbe, DndSource, NullSource};
