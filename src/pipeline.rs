//! Date extraction pipeline: scan text with every registered grammar and
//! emit normalized partial-ISO8601 dates paired with their original spans.
//!
//! Each grammar gets one independent pass (non-overlapping matches,
//! left-to-right); per-grammar result lists are concatenated in registry
//! order. Overlapping captures across different grammars are all emitted —
//! there is no dedup or merge step.

use serde::{Deserialize, Serialize};

use crate::assemble;
use crate::calendar::EpochTable;
use crate::fields::{self, RawMatch};
use crate::grammar::{self, GrammarRegistry};

/// A normalized date paired with the span that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDate {
    /// Partial-ISO8601 string, e.g. "2016-10-01", "--10-15", "1995-02".
    pub date: String,
    /// The original matched text, for auditability.
    pub raw: String,
    /// Which grammar produced the match.
    pub grammar: String,
    /// Byte offset of the match in the input text.
    pub byte_offset: usize,
}

/// The scanner: a sealed grammar registry plus a sealed epoch table.
/// Purely computational and immutable — safe to share across threads.
pub struct DateScanner {
    registry: GrammarRegistry,
    epochs: EpochTable,
}

impl DateScanner {
    pub fn new(registry: GrammarRegistry, epochs: EpochTable) -> Self {
        DateScanner { registry, epochs }
    }

    /// Default grammars over the default epoch table.
    pub fn with_defaults() -> Self {
        let epochs = EpochTable::default_table();
        let registry = grammar::default_registry(&epochs);
        DateScanner::new(registry, epochs)
    }

    pub fn epochs(&self) -> &EpochTable {
        &self.epochs
    }

    /// Scan a text with every registered grammar.
    ///
    /// Within a grammar, results are ordered by match start offset. A match
    /// is dropped when its grammar requires a month and none could be
    /// resolved, or when its month token fails the grammar's strict
    /// re-validation. Everything else degrades to a more partial date.
    pub fn scan(&self, text: &str) -> Vec<NormalizedDate> {
        let mut results = Vec::new();

        for grammar in self.registry.all() {
            for caps in grammar.pattern().captures_iter(text) {
                let raw = RawMatch::from_captures(grammar.name(), &caps);

                // Second, stricter pass: the broad Latin patterns accept any
                // word-shaped token as a month candidate; only genuine month
                // names survive.
                if let Some(strict) = grammar.strict_month() {
                    match raw.month.as_deref() {
                        Some(token) if strict.is_match(token) => {}
                        _ => continue,
                    }
                }

                let f = fields::extract(&raw, grammar.cleanup(), &self.epochs);
                if grammar.requires_month() && f.month.is_none() {
                    continue;
                }

                results.push(NormalizedDate {
                    date: assemble::assemble(f.year, f.month, f.day),
                    raw: raw.text,
                    grammar: grammar.name().to_string(),
                    byte_offset: raw.start,
                });
            }
        }

        results
    }
}
