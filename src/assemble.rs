//! Partial-ISO8601 assembly from optional (year, month, day) fields.
//!
//! Absent fields render as `-` placeholders at their field width. A partial
//! date is a valid, expected output — never an error.

/// Output formatting mode, selected by pattern match over a closed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Historical behavior: a day without a month is appended directly
    /// after the year segment with no separating dash.
    #[default]
    Compat,
    /// Always separate the day from the year segment with a dash.
    Strict,
}

/// Assemble with the default compatibility style.
pub fn assemble(year: Option<i32>, month: Option<u8>, day: Option<u8>) -> String {
    assemble_with(year, month, day, Style::Compat)
}

/// Assemble a partial-ISO8601 string.
///
/// Year present renders at its natural digit count followed by `-`; absent
/// renders as `--`. Month and day are zero-padded to two digits. With
/// neither month nor day, the month segment renders as `--`.
pub fn assemble_with(
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    style: Style,
) -> String {
    let year_seg = match year {
        Some(y) => format!("{y}-"),
        None => "--".to_string(),
    };
    match (month, day) {
        (Some(m), Some(d)) => format!("{year_seg}{m:02}-{d:02}"),
        (Some(m), None) => format!("{year_seg}{m:02}"),
        (None, Some(d)) => match style {
            Style::Compat => format!("{year_seg}{d:02}"),
            Style::Strict => format!("{year_seg}-{d:02}"),
        },
        (None, None) => format!("{year_seg}--"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_date() {
        assert_eq!(assemble(Some(2016), Some(10), Some(1)), "2016-10-01");
    }

    #[test]
    fn test_year_month() {
        assert_eq!(assemble(Some(2016), Some(10), None), "2016-10");
        assert_eq!(assemble(Some(1995), Some(2), None), "1995-02");
    }

    #[test]
    fn test_month_day_without_year() {
        assert_eq!(assemble(None, Some(10), Some(15)), "--10-15");
        assert_eq!(assemble(None, Some(10), Some(1)), "--10-01");
    }

    #[test]
    fn test_month_only() {
        assert_eq!(assemble(None, Some(5), None), "--05");
    }

    #[test]
    fn test_day_without_month_compat_quirk() {
        // Day digits directly appended, no separating dash.
        assert_eq!(assemble(None, None, Some(10)), "--10");
        assert_eq!(assemble(Some(2016), None, Some(3)), "2016-03");
    }

    #[test]
    fn test_day_without_month_strict() {
        assert_eq!(assemble_with(None, None, Some(10), Style::Strict), "---10");
        assert_eq!(
            assemble_with(Some(2016), None, Some(3), Style::Strict),
            "2016--03"
        );
    }

    #[test]
    fn test_neither_month_nor_day() {
        assert_eq!(assemble(Some(2016), None, None), "2016---");
        assert_eq!(assemble(None, None, None), "----");
    }

    #[test]
    fn test_year_natural_digit_count() {
        // No zero-padding beyond the year's natural digits.
        assert_eq!(assemble(Some(794), Some(10), Some(22)), "794-10-22");
    }
}
