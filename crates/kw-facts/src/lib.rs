//! # kw-facts
//!
//! Static German-language content keyed by ISO week number: a proverb of
//! the week and a this-week-in-history fact.  Both tables hold 53 entries
//! and wrap on lookup, so every week of every year resolves to something.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Historical facts per week.
pub mod facts;

/// Proverbs per week.
pub mod motto;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use facts::fact_for_week;
pub use motto::motto_for_week;
