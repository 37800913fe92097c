//! All-or-nothing confirmation and per-label aggregation.

use crate::core::duration::parse_row_times;
use crate::models::{ConfirmedEntry, Report, Row, SummaryEntry};
use crate::utils::time::minutes_between;
use std::collections::HashMap;

/// Validate every used row and snapshot them as confirmed entries, sorted by
/// entry time ascending.
///
/// A single invalid row fails the whole operation: nothing is committed and
/// one message per bad row comes back, numbered by the row's 1-based position
/// over all rows (unused ones included, so the numbers match what the host
/// displays).
pub fn confirm_rows(rows: &[Row]) -> Result<Vec<ConfirmedEntry>, Vec<String>> {
    let mut errors = Vec::new();
    let mut confirmed = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        if !row.is_used() {
            continue;
        }

        match parse_row_times(row) {
            Ok((t_in, t_out)) => confirmed.push(ConfirmedEntry {
                entry_time: t_in,
                exit_time: t_out,
                duration_minutes: minutes_between(t_in, t_out),
                label: row.label.trim().to_string(),
            }),
            Err(e) => errors.push(format!("Row {}: {}", i + 1, e)),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    confirmed.sort_by_key(|e| e.entry_time);
    Ok(confirmed)
}

/// Group confirmed entries by label and sum their durations.
///
/// Labels sort case-insensitively; the empty label is its own group and sorts
/// last.
pub fn summarize(entries: &[ConfirmedEntry]) -> Report {
    let mut totals: HashMap<&str, i64> = HashMap::new();

    for e in entries {
        *totals.entry(e.label.as_str()).or_insert(0) += e.duration_minutes;
    }

    let mut summary: Vec<SummaryEntry> = totals
        .into_iter()
        .map(|(label, total_minutes)| SummaryEntry {
            label: label.to_string(),
            total_minutes,
        })
        .collect();

    summary.sort_by(|a, b| {
        (a.label.is_empty(), a.label.to_lowercase())
            .cmp(&(b.label.is_empty(), b.label.to_lowercase()))
    });

    let total_minutes = summary.iter().map(|s| s.total_minutes).sum();

    Report {
        entries: summary,
        total_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(t_in: &str, t_out: &str, label: &str) -> ConfirmedEntry {
        let rows = [Row::new(t_in, t_out, label)];
        confirm_rows(&rows).unwrap().remove(0)
    }

    #[test]
    fn one_bad_row_aborts_everything() {
        let rows = [
            Row::new("09:00", "17:30", "good"),
            Row::new("17:00", "09:00", "bad"),
            Row::new("", "", ""),
            Row::new("09:00", "", "also bad"),
        ];

        let errs = confirm_rows(&rows).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert!(errs[0].starts_with("Row 2:"));
        assert!(errs[1].starts_with("Row 4:"));
    }

    #[test]
    fn unused_rows_are_skipped() {
        let rows = [Row::default(), Row::new("09:00", "10:00", "a")];
        let confirmed = confirm_rows(&rows).unwrap();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].duration_minutes, 60);
    }

    #[test]
    fn confirmed_entries_sort_by_entry_time() {
        let rows = [
            Row::new("13:00", "14:00", "b"),
            Row::new("09:00", "10:00", "a"),
        ];
        let confirmed = confirm_rows(&rows).unwrap();
        assert_eq!(confirmed[0].label, "a");
        assert_eq!(confirmed[1].label, "b");
    }

    #[test]
    fn same_label_sums_exactly() {
        let entries = [
            entry("09:00", "10:15", "meetings"),
            entry("14:00", "15:45", "meetings"),
        ];
        let report = summarize(&entries);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].total_minutes, 75 + 105);
    }

    #[test]
    fn empty_label_groups_separately_and_sorts_last() {
        let entries = [
            entry("09:00", "10:00", ""),
            entry("10:00", "11:00", "Zed"),
            entry("11:00", "12:00", "alpha"),
        ];
        let report = summarize(&entries);
        let labels: Vec<&str> = report.entries.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "Zed", ""]);
        assert_eq!(report.total_minutes, 180);
    }
}
