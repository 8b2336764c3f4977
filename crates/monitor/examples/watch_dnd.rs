//! Example: Watch the platform Do Not Disturb state and print transitions.
//!
//! Run with: cargo run -p dnd-monitor --example watch_dnd

use dnd_monitor::{DndEvent, DndMonitor};
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dnd_monitor=debug,dnd_detect=debug")),
        )
        .init();

    println!("=== DND Monitor Example ===");
    println!("Toggle Do Not Disturb / Focus to see events. Ctrl+C to stop.\n");

    let mut monitor = DndMonitor::with_platform(&json!({ "monitorDnd": true }))?;
    let mut events = monitor.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => match event {
                Ok(DndEvent::Started) => println!("Do Not Disturb is on"),
                Ok(DndEvent::Finished) => println!("Do Not Disturb is off"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "fell behind the event stream");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    monitor.stop();
    println!("\nDone.");
    Ok(())
}
