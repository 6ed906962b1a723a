//! # kw-worktime
//!
//! Working-day and working-hour calculations over the holiday tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Hours-per-day input parsing.
pub mod hours;

/// Working-day checks and the week/year summary.
pub mod working;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use hours::{parse_hours_per_day, DEFAULT_HOURS_PER_DAY};
pub use working::{is_working_day, working_time, WorkingTimeSummary};
