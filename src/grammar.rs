//! Date grammar definitions and the ordered pattern registry.
//!
//! Each grammar is a named family of date expressions: one compiled regex
//! with the optional named groups `era`, `year`, `month`, `day`, plus the
//! cleanup its captures need. Registration order is significant — it is the
//! order the pipeline scans in. The registry is mutable only through
//! [`RegistryBuilder`]; sealing yields the immutable [`GrammarRegistry`]
//! shared by all scans.

use regex::Regex;
use thiserror::Error;

use crate::calendar::EpochTable;
use crate::month;

// ── Grammar definition ───────────────────────────────────────────────

/// Post-match cleanup a grammar's captured fields need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    /// Latin and numeric grammars capture bare digits/words.
    None,
    /// Asian-script and elliptical grammars capture a trailing glyph
    /// (年/月/日) that must be stripped before numeric conversion.
    TrailingGlyph,
}

/// A named family of date expressions.
pub struct DateGrammar {
    name: String,
    pattern: Regex,
    cleanup: Cleanup,
    requires_month: bool,
    strict_month: Option<Regex>,
}

impl DateGrammar {
    pub fn new(
        name: impl Into<String>,
        pattern: Regex,
        cleanup: Cleanup,
        requires_month: bool,
    ) -> Self {
        DateGrammar {
            name: name.into(),
            pattern,
            cleanup,
            requires_month,
            strict_month: None,
        }
    }

    /// Attach a second, stricter pattern that re-validates the captured
    /// month token. The broad pattern finds candidate windows; candidates
    /// whose month token fails this check are dropped, not emitted.
    pub fn with_strict_month(mut self, strict: Regex) -> Self {
        self.strict_month = Some(strict);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn cleanup(&self) -> Cleanup {
        self.cleanup
    }

    pub fn requires_month(&self) -> bool {
        self.requires_month
    }

    pub fn strict_month(&self) -> Option<&Regex> {
        self.strict_month.as_ref()
    }
}

// ── Registry ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Registering two grammars under one name is a programmer error,
    /// fatal at initialization — never recoverable at runtime.
    #[error("grammar `{0}` is already registered")]
    DuplicateGrammar(String),
}

/// Mutable setup stage for the grammar registry.
pub struct RegistryBuilder {
    grammars: Vec<DateGrammar>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder {
            grammars: Vec::new(),
        }
    }

    pub fn register(&mut self, grammar: DateGrammar) -> Result<(), RegistryError> {
        if self.grammars.iter().any(|g| g.name == grammar.name) {
            return Err(RegistryError::DuplicateGrammar(grammar.name));
        }
        self.grammars.push(grammar);
        Ok(())
    }

    pub fn seal(self) -> GrammarRegistry {
        GrammarRegistry {
            grammars: self.grammars,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, ordered grammar collection. Scan order == registration order.
pub struct GrammarRegistry {
    grammars: Vec<DateGrammar>,
}

impl GrammarRegistry {
    pub fn all(&self) -> &[DateGrammar] {
        &self.grammars
    }

    pub fn get(&self, name: &str) -> Option<&DateGrammar> {
        self.grammars.iter().find(|g| g.name == name)
    }
}

// ── Default grammar set ──────────────────────────────────────────────

/// Build the standard five-grammar registry, in scan-priority order:
/// `asian`, `numeric`, `latin-month-first`, `latin-day-first`, `this-month`.
///
/// Month (1–12) and day (1–31) ranges are enforced inside each pattern,
/// so an out-of-range token can never surface as a match. The `regex`
/// crate has no lookaround, so "a day is not a prefix of a longer digit
/// run" is enforced with `\b` after the day group instead.
pub fn default_registry(epochs: &EpochTable) -> GrammarRegistry {
    let era = epochs.era_alternation();
    let mut builder = RegistryBuilder::new();

    // Asian-script date: optional era, optional glyph-suffixed year,
    // required glyph-suffixed month, optional glyph-suffixed day.
    // Covers 2016年10月1日, 2016年10月, 10月1日, 民國105年10月10日, 同年10月.
    let asian = Regex::new(&format!(
        r"(?P<era>{era})?(?P<year>\d{{1,4}}年)?(?P<month>(?:1[0-2]|0?[1-9])月)(?P<day>(?:3[01]|[12][0-9]|0?[1-9])日)?"
    ))
    .expect("asian date regex");

    // Numeric ISO-like date: 4-digit year, 2-digit month, 2-digit day,
    // with or without separators.
    let numeric = Regex::new(
        r"(?P<year>\d{4})[-/.]?(?P<month>0[1-9]|1[0-2])[-/.]?(?P<day>0[1-9]|[12][0-9]|3[01])",
    )
    .expect("numeric date regex");

    // Latin grammars: a broad word-shaped month candidate, re-validated by
    // the strict alternation below. The day group must end on a word
    // boundary, so a 4-digit year is never claimed as a day ("FEB 1995"
    // parses as year 1995, not day 19).
    let strict_month = Regex::new(&format!("(?i)^(?:{})$", month::month_alternation()))
        .expect("strict month regex");

    // Month name, then optional day, then optional year.
    let latin_month_first = Regex::new(
        r"\b(?P<month>[A-Za-z]{3,9})\b\.?,?\s*(?:(?P<day>3[01]|[12][0-9]|0?[1-9])(?:st|nd|rd|th)?\b[\s,]*)?(?P<year>\d{4})?",
    )
    .expect("latin month-first regex");

    // Optional day (with ordinal suffix and optional "of"), then month,
    // then optional year.
    let latin_day_first = Regex::new(
        r"(?:\b(?P<day>3[01]|[12][0-9]|0?[1-9])(?:st|nd|rd|th)?\s+(?:[Oo]f\s+)?)?\b(?P<month>[A-Za-z]{3,9})\b\.?,?\s*(?P<year>\d{4})?",
    )
    .expect("latin day-first regex");

    // Elliptical "this month" marker + glyph-suffixed day. The marker
    // satisfies the month slot lexically but carries no month value, so
    // the match is emitted day-only.
    let this_month = Regex::new(r"本月(?P<day>(?:3[01]|[12][0-9]|0?[1-9])日)")
        .expect("this-month regex");

    builder
        .register(DateGrammar::new("asian", asian, Cleanup::TrailingGlyph, true))
        .expect("default grammar names are distinct");
    builder
        .register(DateGrammar::new("numeric", numeric, Cleanup::None, true))
        .expect("default grammar names are distinct");
    builder
        .register(
            DateGrammar::new("latin-month-first", latin_month_first, Cleanup::None, true)
                .with_strict_month(strict_month.clone()),
        )
        .expect("default grammar names are distinct");
    builder
        .register(
            DateGrammar::new("latin-day-first", latin_day_first, Cleanup::None, true)
                .with_strict_month(strict_month),
        )
        .expect("default grammar names are distinct");
    builder
        .register(DateGrammar::new(
            "this-month",
            this_month,
            Cleanup::TrailingGlyph,
            false,
        ))
        .expect("default grammar names are distinct");

    builder.seal()
}
