use chrono::NaiveTime;
use serde::Serialize;

/// A validated, time-ordered row snapshot. Created only by a successful
/// confirmation; never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfirmedEntry {
    pub entry_time: NaiveTime,
    pub exit_time: NaiveTime,
    pub duration_minutes: i64,
    pub label: String,
}

impl ConfirmedEntry {
    pub fn entry_str(&self) -> String {
        self.entry_time.format("%H:%M").to_string()
    }

    pub fn exit_str(&self) -> String {
        self.exit_time.format("%H:%M").to_string()
    }
}
