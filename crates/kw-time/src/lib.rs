//! # kw-time
//!
//! Date, ISO week, German formatting, and clock types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Wall-clock access and second-resolution timestamps.
pub mod clock;

/// `Date` type.
pub mod date;

/// German date formatting helpers.
pub mod format;

/// ISO-8601 week arithmetic.
pub mod iso_week;

/// `Month` — month of the year.
pub mod month;

/// Relative week descriptions.
pub mod relative;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{now, today, Timestamp};
pub use date::Date;
pub use iso_week::{IsoWeek, WeekRange};
pub use month::Month;
pub use weekday::Weekday;
