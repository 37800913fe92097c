//! Row duration computation and validation.

use crate::core::format::parse_hm;
use crate::errors::RowError;
use crate::models::Row;
use crate::utils::time::minutes_between;
use chrono::NaiveTime;

fn parse_field(text: &str) -> Result<NaiveTime, RowError> {
    if text.len() != 5 || !text.contains(':') {
        return Err(RowError::FormatError);
    }

    let (h, m) = parse_hm(text).ok_or(RowError::FormatError)?;

    if h > 23 || m > 59 {
        return Err(RowError::RangeError);
    }

    // Range was just checked, from_hms_opt cannot fail here.
    NaiveTime::from_hms_opt(h, m, 0).ok_or(RowError::RangeError)
}

/// Parse a used row's entry/exit fields into times, enforcing ordering.
pub fn parse_row_times(row: &Row) -> Result<(NaiveTime, NaiveTime), RowError> {
    let (entry, exit, _) = row.values();

    if entry.is_empty() || exit.is_empty() {
        return Err(RowError::MissingField);
    }

    let t_in = parse_field(entry)?;
    let t_out = parse_field(exit)?;

    if t_out <= t_in {
        return Err(RowError::OrderError);
    }

    Ok((t_in, t_out))
}

/// Duration of a row in minutes.
///
/// An unused row (all three fields blank) has no duration and no error;
/// any other shape must validate completely.
pub fn compute_duration(row: &Row) -> Result<Option<i64>, RowError> {
    if !row.is_used() {
        return Ok(None);
    }

    let (t_in, t_out) = parse_row_times(row)?;
    Ok(Some(minutes_between(t_in, t_out)))
}
