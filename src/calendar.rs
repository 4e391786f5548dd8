//! Static dictionary of calendar epochs and era-to-Gregorian conversion.
//!
//! Two kinds of epoch exist: fixed-offset eras (民國 year 1 = 1912, so the
//! offset is 1911; likewise the Japanese imperial eras) and current-year
//! markers (同年/今年), which stand for "the year already established as
//! current" and are approximated by the present calendar year. The table is
//! built once via [`EpochTableBuilder`] and is immutable afterward.

use chrono::Datelike;
use serde::Serialize;

// ── Epoch kinds ──────────────────────────────────────────────────────

/// How an era token converts to a Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EpochKind {
    /// Gregorian year = era-relative year + offset.
    FixedOffset(i32),
    /// Anaphoric marker resolved to the present calendar year.
    /// The era-relative year, if any, is ignored.
    CurrentYear,
}

/// A single era token with its conversion rule.
#[derive(Debug, Clone, Serialize)]
pub struct EpochEntry {
    pub token: String,
    pub kind: EpochKind,
}

// ── Builder → sealed table ───────────────────────────────────────────

/// Mutable setup stage for the epoch table. Sealing yields the
/// immutable [`EpochTable`] used by the converter and the grammars.
pub struct EpochTableBuilder {
    entries: Vec<EpochEntry>,
    current_year: i32,
}

impl EpochTableBuilder {
    pub fn new() -> Self {
        EpochTableBuilder {
            entries: Vec::new(),
            current_year: chrono::Utc::now().year(),
        }
    }

    /// Override the present calendar year (deterministic tests, replays).
    pub fn current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn entry(mut self, token: impl Into<String>, kind: EpochKind) -> Self {
        self.entries.push(EpochEntry {
            token: token.into(),
            kind,
        });
        self
    }

    /// The standard inventory: Minguo (traditional and simplified script)
    /// plus the modern Japanese imperial eras, and the same-year/this-year
    /// anaphor markers.
    pub fn default_entries(self) -> Self {
        self.entry("民國", EpochKind::FixedOffset(1911))
            .entry("民国", EpochKind::FixedOffset(1911))
            .entry("明治", EpochKind::FixedOffset(1867))
            .entry("大正", EpochKind::FixedOffset(1911))
            .entry("昭和", EpochKind::FixedOffset(1925))
            .entry("平成", EpochKind::FixedOffset(1988))
            .entry("令和", EpochKind::FixedOffset(2018))
            .entry("同年", EpochKind::CurrentYear)
            .entry("今年", EpochKind::CurrentYear)
    }

    pub fn seal(self) -> EpochTable {
        EpochTable {
            entries: self.entries,
            current_year: self.current_year,
        }
    }
}

impl Default for EpochTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable era lookup table, read-only after sealing.
pub struct EpochTable {
    entries: Vec<EpochEntry>,
    current_year: i32,
}

impl EpochTable {
    pub fn builder() -> EpochTableBuilder {
        EpochTableBuilder::new()
    }

    /// The standard table with the present year taken from the clock.
    pub fn default_table() -> Self {
        Self::builder().default_entries().seal()
    }

    pub fn entries(&self) -> &[EpochEntry] {
        &self.entries
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn lookup(&self, token: &str) -> Option<EpochKind> {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.kind)
    }

    /// Convert an era-relative year to a Gregorian year.
    ///
    /// Current-year markers resolve regardless of the relative year.
    /// Fixed-offset eras require `era_relative_year >= 1`; anything else
    /// returns `None` — a year is never fabricated for out-of-range input.
    /// Unknown tokens also return `None`; absence is the signal, not an error.
    pub fn convert(&self, era_token: &str, era_relative_year: i32) -> Option<i32> {
        match self.lookup(era_token)? {
            EpochKind::CurrentYear => Some(self.current_year),
            EpochKind::FixedOffset(offset) => {
                if era_relative_year < 1 {
                    None
                } else {
                    Some(era_relative_year + offset)
                }
            }
        }
    }

    /// Build a regex alternation matching any known era token.
    /// Sorted by length descending so longer tokens match first.
    pub fn era_alternation(&self) -> String {
        if self.entries.is_empty() {
            // Never matches; keeps the enclosing grammar well-formed.
            return r"[^\s\S]".to_string();
        }
        let mut tokens: Vec<&str> = self.entries.iter().map(|e| e.token.as_str()).collect();
        tokens.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
        tokens.dedup();
        tokens.join("|")
    }
}
