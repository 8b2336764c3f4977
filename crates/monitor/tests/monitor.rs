//! Integration tests for the DND monitor.
//!
//! Runs on tokio's paused clock so one-second ticks cost nothing.

use async_trait::async_trait;
use dnd_monitor::{
    DndEvent, DndMonitor, DndSource, MonitorConfig, MonitorError, NullSource,
    DEFAULT_QUERY_TIMEOUT, EVENT_CHANNEL_CAPACITY,
};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

/// Replays scripted samples, then reports `fallback` forever.
struct ScriptedSource {
    samples: Mutex<VecDeque<bool>>,
    fallback: bool,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(samples: impl IntoIterator<Item = bool>) -> Arc<Self> {
        Arc::new(Self {
            samples: Mutex::new(samples.into_iter().collect()),
            fallback: false,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    fn constant(value: bool) -> Arc<Self> {
        Self::slow(value, Duration::ZERO)
    }

    fn slow(value: bool, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            samples: Mutex::new(VecDeque::new()),
            fallback: value,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DndSource for ScriptedSource {
    async fn is_dnd_active(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.samples
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

fn disabled() -> serde_json::Value {
    json!({ "monitorDnd": false })
}

fn drain(rx: &mut Receiver<DndEvent>) -> Vec<DndEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn monitor_for(source: &Arc<ScriptedSource>) -> DndMonitor<Arc<ScriptedSource>> {
    DndMonitor::new(&disabled(), Arc::clone(source), MonitorConfig::default()).unwrap()
}

// =============================================================================
// Edge events
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_scenario_started_then_finished() {
    let source = ScriptedSource::new([false, false, true, true, false]);
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(4500)).await;

    assert_eq!(source.calls(), 5);
    assert_eq!(drain(&mut rx), vec![DndEvent::Started, DndEvent::Finished]);
    assert!(!monitor.is_on_dnd());
}

#[tokio::test(start_paused = true)]
async fn test_first_sample_taken_immediately() {
    let source = ScriptedSource::constant(true);
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(source.calls(), 1);
    assert_eq!(drain(&mut rx), vec![DndEvent::Started]);
    assert!(monitor.is_on_dnd());
}

#[tokio::test(start_paused = true)]
async fn test_steady_state_emits_nothing() {
    let source = ScriptedSource::constant(false);
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert!(source.calls() >= 10);
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_every_subscriber_sees_events_in_order() {
    let source = ScriptedSource::new([true, false, true]);
    let mut monitor = monitor_for(&source);
    let mut first = monitor.subscribe();
    let mut second = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(2500)).await;

    let expected = vec![DndEvent::Started, DndEvent::Finished, DndEvent::Started];
    assert_eq!(drain(&mut first), expected);
    assert_eq!(drain(&mut second), expected);
}

#[tokio::test(start_paused = true)]
async fn test_lagging_subscriber_recovers() {
    let source = ScriptedSource::new((0..20).map(|i| i % 2 == 0));
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(19_500)).await;
    assert_eq!(source.calls(), 20);

    // 20 events into a 16-slot channel drop the oldest 4.
    assert_eq!(rx.try_recv(), Err(TryRecvError::Lagged(4)));
    let rest = drain(&mut rx);
    assert_eq!(rest.len(), EVENT_CHANNEL_CAPACITY);
    assert_eq!(rest[0], DndEvent::Started);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_enabled_settings_start_on_construction() {
    let source = ScriptedSource::constant(true);
    let monitor = DndMonitor::new(
        &json!({ "monitorDnd": true }),
        Arc::clone(&source),
        MonitorConfig::default(),
    )
    .unwrap();
    let mut rx = monitor.subscribe();

    assert!(monitor.is_enabled());
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(drain(&mut rx), vec![DndEvent::Started]);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_settings_do_not_poll() {
    let source = ScriptedSource::constant(true);
    let monitor = monitor_for(&source);

    tokio::time::sleep(Duration::from_secs(3)).await;

    assert!(!monitor.is_enabled());
    assert_eq!(source.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_double_start_arms_one_poller() {
    let source = ScriptedSource::constant(true);
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(3500)).await;

    assert_eq!(source.calls(), 4);
    assert_eq!(drain(&mut rx), vec![DndEvent::Started]);
}

#[tokio::test(start_paused = true)]
async fn test_stop_resets_silently() {
    let source = ScriptedSource::constant(true);
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(monitor.is_on_dnd());

    monitor.stop();
    assert!(!monitor.is_enabled());
    assert!(!monitor.is_on_dnd());

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(drain(&mut rx), vec![DndEvent::Started]);
}

#[tokio::test(start_paused = true)]
async fn test_restart_reports_dnd_again() {
    let source = ScriptedSource::constant(true);
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    monitor.stop();
    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(drain(&mut rx), vec![DndEvent::Started, DndEvent::Started]);
}

#[tokio::test(start_paused = true)]
async fn test_stop_when_stopped_is_noop() {
    let source = ScriptedSource::constant(true);
    let mut monitor = monitor_for(&source);
    let mut rx = monitor.subscribe();

    monitor.stop();
    monitor.stop();

    assert!(!monitor.is_enabled());
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test(start_paused = true)]
async fn test_stop_discards_in_flight_query() {
    let source = ScriptedSource::slow(true, Duration::from_secs(3));
    let mut monitor = DndMonitor::new(
        &disabled(),
        Arc::clone(&source),
        MonitorConfig::default().with_query_timeout(Duration::from_secs(10)),
    )
    .unwrap();
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(source.calls(), 1);

    monitor.stop();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    assert!(!monitor.is_on_dnd());
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_query_delays_next_tick() {
    let source = ScriptedSource::slow(false, Duration::from_millis(2500));
    let mut monitor = DndMonitor::new(
        &disabled(),
        Arc::clone(&source),
        MonitorConfig::default().with_query_timeout(Duration::from_secs(10)),
    )
    .unwrap();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(4900)).await;

    // Queries start at 0s and 2.5s; the ticks in between are skipped.
    assert_eq!(source.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_query_timeout_reads_as_inactive() {
    let source = ScriptedSource::slow(true, Duration::from_secs(30));
    let mut monitor = DndMonitor::new(
        &disabled(),
        Arc::clone(&source),
        MonitorConfig::default().with_query_timeout(Duration::from_millis(500)),
    )
    .unwrap();
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(source.calls() >= 2);
    assert!(drain(&mut rx).is_empty());
    assert!(!monitor.is_on_dnd());
}

#[tokio::test(start_paused = true)]
async fn test_zero_query_timeout_still_detects() {
    let source = ScriptedSource::slow(true, Duration::from_millis(1));
    let mut monitor = DndMonitor::new(
        &disabled(),
        Arc::clone(&source),
        MonitorConfig::default().with_query_timeout(Duration::ZERO),
    )
    .unwrap();
    let mut rx = monitor.subscribe();

    monitor.start().unwrap();
    tokio::time::sleep(Duration::from_millis(4500)).await;

    assert_eq!(monitor.config().query_timeout(), DEFAULT_QUERY_TIMEOUT);
    assert_eq!(source.calls(), 5);
    assert_eq!(drain(&mut rx), vec![DndEvent::Started]);
    assert!(monitor.is_on_dnd());
}

#[test]
fn test_start_without_runtime() {
    let mut monitor = DndMonitor::new(&disabled(), NullSource, MonitorConfig::default()).unwrap();
    assert!(matches!(monitor.start(), Err(MonitorError::NoRuntime)));
    assert!(!monitor.is_enabled());

    let enabled = json!({ "monitorDnd": true });
    let result = DndMonitor::new(&enabled, NullSource, MonitorConfig::default());
    assert!(matches!(result, Err(MonitorError::NoRuntime)));
}
