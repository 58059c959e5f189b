//! Small formatting helpers shared by the tab renderers.

use chrono::NaiveDate;

/// Case-insensitive substring match for search filtering
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Truncate a string to `max` characters, appending an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Format a backend `YYYY-MM-DD` date for display, passing through
/// anything that does not parse
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// The `YYYY-MM-DD` prefix of a datetime string. Returns the whole string
/// when it is shorter than a date or byte 10 is not a char boundary.
pub fn date_part(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Soto Valdés", "soto"));
        assert!(!contains_ignore_case("Soto", "perez"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long diagnosis", 10), "a very lo…");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-05-01"), "01 May 2025");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-05-01T09:30:00Z"), "2025-05-01");
        assert_eq!(date_part("2025-05-01"), "2025-05-01");
        assert_eq!(date_part("short"), "short");
        // Byte 10 lands inside the n-tilde; the cut must not panic
        assert_eq!(date_part("registro ñandú"), "registro ñandú");
    }
}
