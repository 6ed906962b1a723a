//! # kw-progress
//!
//! Period progress and live countdowns.
//!
//! A "period" is the month, quarter, half-year, or year containing a given
//! day.  For each one this crate reports how much of it has elapsed (a
//! floored whole percentage) and how much wall-clock time remains until its
//! last second.  [`ProgressTicker`] keeps those figures fresh by emitting a
//! new [`ProgressSnapshot`] every second while the watched day is today.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Remaining-time countdowns.
pub mod countdown;

/// Calendar periods and their spans.
pub mod period;

/// Percent-elapsed figures per period.
pub mod progress;

/// Once-per-second snapshot worker.
pub mod ticker;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use countdown::TimeLeft;
pub use period::{quarter_of, PeriodKind, PeriodSpan, PERIOD_KINDS};
pub use progress::{period_progress, progress_snapshot, PeriodProgress, ProgressSnapshot};
pub use ticker::ProgressTicker;
