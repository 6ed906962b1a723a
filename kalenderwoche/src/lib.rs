//! # kalenderwoche
//!
//! Calendar-week, holiday, working-time, and solar utilities for a
//! German-language week planner.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates and adds the application-level [`Selection`] / [`WeekSnapshot`]
//! pair.  Application code should depend on this crate rather than the
//! individual `kw-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! kalenderwoche = "0.1"
//! ```
//!
//! ```rust
//! use kalenderwoche::time::Date;
//! use kalenderwoche::WeekSnapshot;
//! use kalenderwoche::core::Jurisdiction;
//!
//! let day = Date::from_ymd(2025, 5, 14)?;
//! let snapshot = WeekSnapshot::compute(day, day, Jurisdiction::Austria, 8.0);
//! assert_eq!(snapshot.week.to_string(), "KW 20/2025");
//! assert_eq!(snapshot.week_label, "12. - 18. Mai 2025");
//! # Ok::<(), kalenderwoche::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, the jurisdiction switch, and error definitions.
pub use kw_core as core;

/// Dates, ISO weeks, German formatting, and the clock.
pub use kw_time as time;

/// Holiday tables and range queries.
pub use kw_holidays as holidays;

/// Daylight saving, sunrise/sunset, and zodiac signs.
pub use kw_astro as astro;

/// Working-day and working-hour calculations.
pub use kw_worktime as worktime;

/// Period progress, countdowns, and the live ticker.
pub use kw_progress as progress;

/// Week mottos and historical facts.
pub use kw_facts as facts;

/// Selection state driving the week view.
pub mod selection;

/// The aggregated per-week snapshot.
pub mod snapshot;

pub use selection::Selection;
pub use snapshot::WeekSnapshot;
