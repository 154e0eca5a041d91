use crate::model::Day;
use std::collections::HashMap;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Localized day names mapped to day codes.
///
/// Keys are NFC-normalized lowercase; lookups must normalize the same way.
/// PDF text layers sometimes emit Č in decomposed form, so matching on raw
/// string literals is not reliable.
static DAY_NAMES: LazyLock<HashMap<&'static str, Day>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("ponedjeljak", Day::Mo);
    m.insert("utorak", Day::Tu);
    m.insert("srijeda", Day::We);
    m.insert("četvrtak", Day::Th);
    m.insert("petak", Day::Fr);
    m.insert("subota", Day::Sa);
    m
});

/// Match a line against the localized day-name table.
///
/// Trims, NFC-normalizes and lowercases before lookup, so decomposed or
/// oddly-cased input still matches. The line must be exactly a day name.
pub fn day_from_name(s: &str) -> Option<Day> {
    let normalized = s.trim().nfc().collect::<String>().to_lowercase();
    DAY_NAMES.get(normalized.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_day_names() {
        assert_eq!(day_from_name("Ponedjeljak"), Some(Day::Mo));
        assert_eq!(day_from_name("Utorak"), Some(Day::Tu));
        assert_eq!(day_from_name("Srijeda"), Some(Day::We));
        assert_eq!(day_from_name("Četvrtak"), Some(Day::Th));
        assert_eq!(day_from_name("Petak"), Some(Day::Fr));
        assert_eq!(day_from_name("Subota"), Some(Day::Sa));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(day_from_name("PETAK"), Some(Day::Fr));
        assert_eq!(day_from_name("ponedjeljak"), Some(Day::Mo));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(day_from_name("  Utorak  "), Some(Day::Tu));
    }

    #[test]
    fn test_decomposed_caron_matches() {
        // "Četvrtak" with C + U+030C COMBINING CARON instead of U+010C
        assert_eq!(day_from_name("C\u{30c}etvrtak"), Some(Day::Th));
    }

    #[test]
    fn test_non_day_lines() {
        assert_eq!(day_from_name("Matematika"), None);
        assert_eq!(day_from_name("Ponedjeljak ujutro"), None);
        assert_eq!(day_from_name(""), None);
    }
}
