//! Session state and the event interface exposed to the host surface.
//!
//! The host surface owns rendering only: it feeds edits and button presses
//! in, and redraws from the projections these methods return. All state
//! lives in `Session`.

use crate::core::confirm::{confirm_rows, summarize};
use crate::core::duration::compute_duration;
use crate::core::format::{is_field_valid, normalize_time_text};
use crate::models::{ConfirmedEntry, Report, Row};

/// Rows shown when a session starts.
pub const START_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Entry,
    Exit,
    Label,
}

/// Projection returned from a field edit: the text to write back into the
/// field and whether to flag it invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub formatted: String,
    pub valid: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    rows: Vec<Row>,
    confirmed: Vec<ConfirmedEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            rows: vec![Row::default(); START_ROWS],
            confirmed: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn confirmed(&self) -> &[ConfirmedEntry] {
        &self.confirmed
    }

    /// Grow the row list so `idx` is addressable.
    pub fn ensure_row(&mut self, idx: usize) {
        if idx >= self.rows.len() {
            self.rows.resize(idx + 1, Row::default());
        }
    }

    /// Apply an edit to one field of one row. Time fields are normalized to
    /// `HH:MM`; labels pass through untouched.
    pub fn on_field_edit(&mut self, idx: usize, field: Field, text: &str) -> FieldEdit {
        self.ensure_row(idx);
        let row = &mut self.rows[idx];

        match field {
            Field::Entry => {
                row.entry_text = normalize_time_text(text);
                FieldEdit {
                    formatted: row.entry_text.clone(),
                    valid: is_field_valid(&row.entry_text),
                }
            }
            Field::Exit => {
                row.exit_text = normalize_time_text(text);
                FieldEdit {
                    formatted: row.exit_text.clone(),
                    valid: is_field_valid(&row.exit_text),
                }
            }
            Field::Label => {
                row.label = text.to_string();
                FieldEdit {
                    formatted: row.label.clone(),
                    valid: true,
                }
            }
        }
    }

    /// Minutes to preview next to a row, if it currently validates.
    pub fn duration_preview(&self, idx: usize) -> Option<i64> {
        let row = self.rows.get(idx)?;
        compute_duration(row).ok().flatten()
    }

    /// Validate and commit every used row.
    ///
    /// On success the confirmed set is replaced wholesale and, when the last
    /// row is used, a fresh empty row is appended for the next entry. On
    /// failure nothing changes.
    pub fn on_confirm(&mut self) -> Result<&[ConfirmedEntry], Vec<String>> {
        let confirmed = confirm_rows(&self.rows)?;
        self.confirmed = confirmed;

        if self.rows.last().is_some_and(|r| r.is_used()) {
            self.rows.push(Row::default());
        }

        Ok(&self.confirmed)
    }

    /// Drop all confirmed entries and blank every row.
    pub fn on_clear(&mut self) {
        self.confirmed.clear();
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Summary over the confirmed entries, recomputed in full.
    pub fn report(&self) -> Report {
        summarize(&self.confirmed)
    }
}
