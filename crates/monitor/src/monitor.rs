//! DND monitor - background task that samples DND state and emits edges.

use crate::config::{monitor_enabled, MonitorConfig, SettingsStore};
use crate::error::MonitorError;
use crate::event::DndEvent;
use crate::state::MonitorState;
use dnd_detect::{DndProbe, DndSource};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{timeout, MissedTickBehavior};

/// Buffered events per subscriber before it starts lagging.
pub const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Periodically samples a [`DndSource`] and broadcasts [`DndEvent`]s on
/// every flip.
///
/// Ticks never overlap: a query slower than the poll interval delays the
/// next sample and missed ticks are skipped.
pub struct DndMonitor<S: DndSource + 'static = DndProbe> {
    source: Arc<S>,
    config: MonitorConfig,
    state: Arc<Mutex<MonitorState>>,
    events: broadcast::Sender<DndEvent>,
    task: Option<JoinHandle<()>>,
}

impl DndMonitor<DndProbe> {
    /// Monitor the running platform with default polling.
    pub fn with_platform(settings: &dyn SettingsStore) -> Result<Self, MonitorError> {
        Self::new(settings, DndProbe::detect(), MonitorConfig::default())
    }
}

impl<S: DndSource + 'static> DndMonitor<S> {
    /// Create a monitor, starting it right away if `settings` enable it.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::NoRuntime`] if monitoring is enabled and no
    /// tokio runtime is available.
    pub fn new(
        settings: &dyn SettingsStore,
        source: S,
        config: MonitorConfig,
    ) -> Result<Self, MonitorError> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let mut monitor = Self {
            source: Arc::new(source),
            config,
            state: Arc::new(Mutex::new(MonitorState::new(false))),
            events,
            task: None,
        };

        if monitor_enabled(settings) {
            monitor.start()?;
        }

        Ok(monitor)
    }

    /// Start polling. The first sample is taken immediately.
    ///
    /// Calling this while already running does not arm a second poller.
    pub fn start(&mut self) -> Result<(), MonitorError> {
        if self.task.as_ref().is_some_and(|task| !task.is_finished()) {
            tracing::warn!("DND monitor already running");
            return Ok(());
        }

        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| MonitorError::NoRuntime)?;

        let generation = {
            let mut state = lock_state(&self.state);
            state.enabled = true;
            state.generation += 1;
            state.generation
        };

        tracing::info!("starting Do Not Disturb monitoring");
        self.source.describe();

        self.task = Some(runtime.spawn(poll_loop(
            Arc::clone(&self.source),
            Arc::clone(&self.state),
            self.events.clone(),
            generation,
            self.config,
        )));

        Ok(())
    }

    /// Stop polling and forget the DND state without emitting `Finished`.
    ///
    /// Safe to call when already stopped. A query still in flight is
    /// cancelled and its result never applied.
    pub fn stop(&mut self) {
        let was_enabled = {
            let mut state = lock_state(&self.state);
            let was_enabled = state.enabled;
            state.enabled = false;
            state.generation += 1;
            state.dnd.reset();
            was_enabled
        };

        if let Some(task) = self.task.take() {
            task.abort();
        }

        if was_enabled {
            tracing::info!("stopping Do Not Disturb monitoring");
        }
    }

    /// Whether polling is active.
    pub fn is_enabled(&self) -> bool {
        lock_state(&self.state).enabled
    }

    /// Last debounced DND value.
    pub fn is_on_dnd(&self) -> bool {
        lock_state(&self.state).dnd.is_on_dnd()
    }

    /// Receive every event emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DndEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}

impl<S: DndSource + 'static> Drop for DndMonitor<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock_state(state: &Mutex<MonitorState>) -> MutexGuard<'_, MonitorState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn poll_loop<S: DndSource + 'static>(
    source: Arc<S>,
    state: Arc<Mutex<MonitorState>>,
    events: broadcast::Sender<DndEvent>,
    generation: u64,
    config: MonitorConfig,
) {
    let mut ticker = tokio::time::interval(config.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::debug!(interval = ?config.poll_interval(), generation, "DND poll task started");

    loop {
        ticker.tick().await;

        // A hung query counts as "not in DND".
        let sample = timeout(config.query_timeout(), source.is_dnd_active())
            .await
            .unwrap_or(false);

        // Emit under the lock so nothing is sent once `stop` has returned.
        let current = {
            let mut state = lock_state(&state);
            if state.is_current(generation) {
                if let Some(event) = state.apply(generation, sample) {
                    tracing::info!(%event, "Do Not Disturb state changed");
                    let _ = events.send(event);
                }
                true
            } else {
                false
            }
        };

        if !current {
            break;
        }
    }

    tracing::debug!(generation, "DND poll task exited");
}
