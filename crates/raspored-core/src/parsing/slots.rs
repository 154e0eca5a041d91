/// Parse an explicit slot marker line: digits followed by a single trailing
/// period, e.g. "3.".
///
/// Anything else (including a bare number) is not a marker.
pub fn parse_slot_marker(s: &str) -> Option<u32> {
    let digits = s.strip_suffix('.')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parse a table slot label, tolerating a trailing period: "1." or "1".
pub fn parse_slot_label(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_basic() {
        assert_eq!(parse_slot_marker("1."), Some(1));
        assert_eq!(parse_slot_marker("12."), Some(12));
    }

    #[test]
    fn test_marker_requires_period() {
        assert_eq!(parse_slot_marker("1"), None);
    }

    #[test]
    fn test_marker_rejects_non_digits() {
        assert_eq!(parse_slot_marker("a."), None);
        assert_eq!(parse_slot_marker("1a."), None);
        assert_eq!(parse_slot_marker("1.2"), None);
        assert_eq!(parse_slot_marker("."), None);
        assert_eq!(parse_slot_marker(""), None);
    }

    #[test]
    fn test_label_with_and_without_period() {
        assert_eq!(parse_slot_label("1."), Some(1));
        assert_eq!(parse_slot_label("7"), Some(7));
        assert_eq!(parse_slot_label("  3.  "), Some(3));
    }

    #[test]
    fn test_label_non_numeric() {
        assert_eq!(parse_slot_label("sat"), None);
        assert_eq!(parse_slot_label(""), None);
    }
}
