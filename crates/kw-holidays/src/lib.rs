//! # kw-holidays
//!
//! German and Austrian holiday tables with range and recurrence queries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` and its queries.
pub mod calendar;

/// Holiday data model (`Holiday`, `HolidayRow`, `HolidayKind`).
pub mod holiday;

/// Built-in reference tables.
pub mod tables;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::HolidayCalendar;
pub use holiday::{Holiday, HolidayKind, HolidayRow};
pub use tables::REFERENCE_YEAR;
