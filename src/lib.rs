//! Date span recognition and normalization.
//!
//! Locates candidate date spans in free text — Gregorian numeric dates,
//! Chinese/Japanese character-delimited dates, era-based dates (Minguo,
//! Japanese era years), elliptical markers, and Latin-script month names in
//! either field order — and normalizes each into a partial ISO 8601 string.
//!
//! The two library entry points are [`pipeline::DateScanner::scan`] and
//! [`calendar::EpochTable::convert`].

pub mod assemble;
pub mod calendar;
pub mod corpus;
pub mod fields;
pub mod grammar;
pub mod month;
pub mod pipeline;

pub use calendar::{EpochKind, EpochTable, EpochTableBuilder};
pub use fields::{DateFields, RawMatch};
pub use grammar::{Cleanup, DateGrammar, GrammarRegistry, RegistryBuilder, RegistryError, default_registry};
pub use pipeline::{DateScanner, NormalizedDate};
