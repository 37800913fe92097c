//! Free-form time-field input normalization.
//!
//! Whatever the user types is reduced to its digits, capped at four, and
//! rendered as `HH:MM` once more than two digits are present. The host calls
//! this on every keystroke and writes the result back into the field.

/// Normalize raw field text into (partial) `HH:MM`.
pub fn normalize_time_text(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();

    if digits.len() <= 2 {
        digits
    } else {
        format!("{}:{}", &digits[..2], &digits[2..])
    }
}

/// Whether normalized field text should be flagged invalid.
///
/// Only a complete 5-char `HH:MM` can be flagged: in-progress text stays
/// neutral so the user is not shouted at mid-typing.
pub fn is_field_valid(text: &str) -> bool {
    if text.len() != 5 || !text.contains(':') {
        return true;
    }

    match parse_hm(text) {
        Some((h, m)) => h <= 23 && m <= 59,
        None => false,
    }
}

/// Split `HH:MM` into numeric (hour, minute) without range-checking.
pub fn parse_hm(text: &str) -> Option<(u32, u32)> {
    let (h, m) = text.split_once(':')?;
    Some((h.parse().ok()?, m.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_digits_and_inserts_colon() {
        assert_eq!(normalize_time_text("0930"), "09:30");
        assert_eq!(normalize_time_text("09:30"), "09:30");
        assert_eq!(normalize_time_text("09h30"), "09:30");
        assert_eq!(normalize_time_text("  17 45 "), "17:45");
        // colon always lands after the 2nd digit, wherever it was typed
        assert_eq!(normalize_time_text("9:30"), "93:0");
    }

    #[test]
    fn caps_at_four_digits() {
        assert_eq!(normalize_time_text("123456789"), "12:34");
    }

    #[test]
    fn short_input_stays_bare() {
        assert_eq!(normalize_time_text(""), "");
        assert_eq!(normalize_time_text("9"), "9");
        assert_eq!(normalize_time_text("12"), "12");
        assert_eq!(normalize_time_text("123"), "12:3");
    }

    #[test]
    fn only_complete_text_is_flagged() {
        assert!(is_field_valid(""));
        assert!(is_field_valid("12:3"));
        assert!(is_field_valid("09:30"));
        assert!(!is_field_valid("25:00"));
        assert!(!is_field_valid("12:75"));
    }
}
