use serde::Serialize;

/// Edge event emitted when the DND state flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum DndEvent {
    /// DND went from off to on.
    #[serde(rename = "dndStarted")]
    Started,
    /// DND went from on to off.
    #[serde(rename = "dndFinished")]
    Finished,
}

impl DndEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DndEvent::Started => "dndStarted",
            DndEvent::Finished => "dndFinished",
        }
    }
}

impl std::fmt::Display for DndEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
