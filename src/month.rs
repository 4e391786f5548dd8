//! English month-name lookup for the Latin-script grammars.
//!
//! Deterministic table lookup, not locale-aware parsing: full names and
//! standard three-letter abbreviations only, case-insensitive, with an
//! optional trailing period.

/// (full name, three-letter abbreviation, month number), all lowercase.
pub const MONTHS: &[(&str, &str, u8)] = &[
    ("january", "jan", 1),
    ("february", "feb", 2),
    ("march", "mar", 3),
    ("april", "apr", 4),
    ("may", "may", 5),
    ("june", "jun", 6),
    ("july", "jul", 7),
    ("august", "aug", 8),
    ("september", "sep", 9),
    ("october", "oct", 10),
    ("november", "nov", 11),
    ("december", "dec", 12),
];

/// Resolve a month token to its number (1–12).
/// Returns `None` for anything that is not a genuine month name —
/// callers must not guess.
pub fn resolve(token: &str) -> Option<u8> {
    let token = token.strip_suffix('.').unwrap_or(token);
    if token.is_empty() {
        return None;
    }
    let lower = token.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(full, abbr, _)| lower == *full || lower == *abbr)
        .map(|(_, _, n)| *n)
}

/// Build a regex alternation matching any month name or abbreviation.
/// Sorted by length descending so "june" matches before "jun".
/// Used by the strict re-validation pass over Latin grammar candidates.
pub fn month_alternation() -> String {
    let mut names: Vec<&str> = MONTHS
        .iter()
        .flat_map(|(full, abbr, _)| [*full, *abbr])
        .collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    names.dedup();
    names.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_names() {
        assert_eq!(resolve("January"), Some(1));
        assert_eq!(resolve("october"), Some(10));
        assert_eq!(resolve("DECEMBER"), Some(12));
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(resolve("Oct"), Some(10));
        assert_eq!(resolve("FEB"), Some(2));
        assert_eq!(resolve("sep"), Some(9));
    }

    #[test]
    fn test_trailing_period() {
        assert_eq!(resolve("Oct."), Some(10));
        assert_eq!(resolve("jan."), Some(1));
    }

    #[test]
    fn test_rejects_everything_else() {
        assert_eq!(resolve("Sept"), None); // not the standard abbreviation
        assert_eq!(resolve("banana"), None);
        assert_eq!(resolve("Octob"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("."), None);
    }

    #[test]
    fn test_alternation_prefers_long_forms() {
        let alt = month_alternation();
        let parts: Vec<&str> = alt.split('|').collect();
        assert!(parts.contains(&"june") && parts.contains(&"jun"));
        for pair in parts.windows(2) {
            assert!(
                pair[0].len() >= pair[1].len(),
                "{} should not precede {}",
                pair[1],
                pair[0]
            );
        }
    }
}
