use serde::Serialize;

/// Per-label total, derived from the confirmed entries. Recomputed in full on
/// every confirmation, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryEntry {
    pub label: String,
    pub total_minutes: i64,
}

/// The sorted summary handed to the host for rendering or export.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<SummaryEntry>,
    pub total_minutes: i64,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
