//! Field extraction: a located grammar match → typed optional date fields.
//!
//! Every rule fails closed: a field that cannot be cleaned up and parsed is
//! absent (`None`), never a sentinel and never a fatal error for the match.

use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::calendar::{EpochKind, EpochTable};
use crate::grammar::Cleanup;
use crate::month;

// ── Raw match ────────────────────────────────────────────────────────

/// A located occurrence of a grammar in text, with the raw captured
/// substring per field. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatch {
    pub grammar: String,
    pub start: usize,
    pub end: usize,
    /// Full matched original text, for traceability.
    pub text: String,
    pub era: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl RawMatch {
    pub fn from_captures(grammar: &str, caps: &Captures) -> Self {
        let full = caps.get(0).unwrap();
        let field = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
        RawMatch {
            grammar: grammar.to_string(),
            start: full.start(),
            end: full.end(),
            text: full.as_str().to_string(),
            era: field("era"),
            year: field("year"),
            month: field("month"),
            day: field("day"),
        }
    }
}

// ── Typed fields ─────────────────────────────────────────────────────

/// Typed, partially-populated date. Absent fields are `None`;
/// downstream formatting distinguishes "absent" from "zero".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateFields {
    pub era: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

/// Extract typed fields from a raw match. Fields are extracted
/// independently, even when siblings are absent.
///
/// A recognized era replaces the raw year with the converted Gregorian
/// year; an unrecognized era leaves the raw parsed integer (best-effort
/// Gregorian literal, not a fatal error).
pub fn extract(raw: &RawMatch, cleanup: Cleanup, epochs: &EpochTable) -> DateFields {
    let year_raw = raw
        .year
        .as_deref()
        .map(|s| strip_glyph(s, cleanup))
        .and_then(parse_year);
    let month = raw
        .month
        .as_deref()
        .map(|s| strip_glyph(s, cleanup))
        .and_then(month_value);
    let day = raw
        .day
        .as_deref()
        .map(|s| strip_glyph(s, cleanup))
        .and_then(parse_day);

    let year = match raw.era.as_deref() {
        Some(era) => match epochs.lookup(era) {
            // Anaphoric marker: the relative year is irrelevant.
            Some(EpochKind::CurrentYear) => Some(epochs.current_year()),
            Some(EpochKind::FixedOffset(_)) => year_raw.and_then(|y| epochs.convert(era, y)),
            None => year_raw,
        },
        None => year_raw,
    };

    DateFields {
        era: raw.era.clone(),
        year,
        month,
        day,
    }
}

/// Strip exactly one trailing glyph character (年/月/日) when the grammar
/// marks its captures as glyph-suffixed.
fn strip_glyph(s: &str, cleanup: Cleanup) -> &str {
    match cleanup {
        Cleanup::None => s,
        Cleanup::TrailingGlyph => match s.char_indices().last() {
            Some((idx, _)) => &s[..idx],
            None => s,
        },
    }
}

fn parse_year(s: &str) -> Option<i32> {
    s.parse::<i32>().ok().filter(|y| *y >= 1)
}

/// Numeric month, or a Latin month name resolved through the normalizer.
fn month_value(s: &str) -> Option<u8> {
    match s.parse::<u8>() {
        Ok(m) if (1..=12).contains(&m) => Some(m),
        Ok(_) => None,
        Err(_) => month::resolve(s),
    }
}

fn parse_day(s: &str) -> Option<u8> {
    s.parse::<u8>().ok().filter(|d| (1..=31).contains(d))
}
