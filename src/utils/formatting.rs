//! Formatting utilities for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render minutes either as "8h 30m" (long) or zero-padded "08:30" (short).
pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;
    let sign = if mins < 0 { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{}h {}m", sign, hours, minutes)
    }
}

/// Per-row duration preview: "HH:MM", or "--:--" when there is nothing to show.
pub fn duration_preview(mins: Option<i64>) -> String {
    match mins {
        Some(m) => mins2readable(m, true),
        None => "--:--".to_string(),
    }
}
