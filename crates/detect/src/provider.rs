//! Source trait for DND state.
//!
//! Abstracts the platform strategies so the poll loop can stay pure and be
//! driven by test doubles.

use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can answer "is Do Not Disturb active right now?".
///
/// Implementations must never fail: a query that cannot be answered is
/// reported as `false`.
#[async_trait]
pub trait DndSource: Send + Sync {
    /// Query the current DND state.
    async fn is_dnd_active(&self) -> bool;

    /// Log whatever is worth knowing about this source when monitoring starts.
    fn describe(&self) {}
}

#[async_trait]
impl<T: DndSource + ?Sized> DndSource for Arc<T> {
    async fn is_dnd_active(&self) -> bool {
        (**self).is_dnd_active().await
    }

    fn describe(&self) {
        (**self).describe();
    }
}

/// Source for unsupported platforms; never reports DND.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSource;

#[async_trait]
impl DndSource for NullSource {
    async fn is_dnd_active(&self) -> bool {
        false
    }
}
