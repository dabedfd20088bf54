//! Format - Formatting Utilities

use chrono::{DateTime, Local, NaiveDate};

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// The `YYYY-MM-DD` prefix of a date or datetime value, if it has one
pub fn date_prefix(value: &str) -> &str {
    value.get(..10).unwrap_or(value)
}

/// Format a `YYYY-MM-DD...` value as a human date; unparseable input is
/// returned unchanged.
pub fn format_date(value: &str) -> String {
    match NaiveDate::parse_from_str(date_prefix(value), "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_prefix() {
        assert_eq!(date_prefix("2024-03-07T10:00:00Z"), "2024-03-07");
        assert_eq!(date_prefix("2024"), "2024");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-07T10:00:00Z"), "7 Mar 2024");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("äöüß", 2), "äö");
    }
}
