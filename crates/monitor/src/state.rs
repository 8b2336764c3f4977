//! Edge detection over sampled DND values.
//!
//! Pure domain logic - no I/O, no timers.

use crate::event::DndEvent;

/// Last observed DND value; starts as "off".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DndState {
    is_on_dnd: bool,
}

impl DndState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on_dnd(&self) -> bool {
        self.is_on_dnd
    }

    /// Apply one sample, returning the event for a flip.
    pub fn observe(&mut self, sample: bool) -> Option<DndEvent> {
        match (self.is_on_dnd, sample) {
            (false, true) => {
                self.is_on_dnd = true;
                Some(DndEvent::Started)
            }
            (true, false) => {
                self.is_on_dnd = false;
                Some(DndEvent::Finished)
            }
            _ => None,
        }
    }

    /// Forget the current value without reporting it.
    pub fn reset(&mut self) {
        self.is_on_dnd = false;
    }
}

/// State shared between the controller and its poll task.
#[derive(Debug, Default)]
pub(crate) struct MonitorState {
    pub(crate) enabled: bool,
    pub(crate) dnd: DndState,
    /// Bumped on every start/stop so a stale task can tell it was superseded.
    pub(crate) generation: u64,
}

impl MonitorState {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Whether the task of `generation` still owns the state.
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.enabled && self.generation == generation
    }

    /// Apply a sample taken by the task of `generation`.
    ///
    /// Returns `None` for samples that arrive after the run ended.
    pub(crate) fn apply(&mut self, generation: u64, sample: bool) -> Option<DndEvent> {
        if !self.is_current(generation) {
            return None;
        }
        self.dnd.observe(sample)
    }
}
