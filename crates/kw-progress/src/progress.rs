//! Period progress percentages and snapshots.

use kw_core::Real;
use kw_time::clock::Timestamp;

use crate::countdown::TimeLeft;
use crate::period::{PeriodKind, PeriodSpan, PERIOD_KINDS};

/// Progress of one reporting period at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodProgress {
    /// Which period this row describes.
    pub kind: PeriodKind,
    /// German display label (`"Mai"`, `"2. Quartal"`, …).
    pub label: String,
    /// Elapsed share of the period in whole percent, clamped to `[0, 100]`.
    pub percent: u8,
    /// Countdown to the period's final second (23:59:59 of its last day).
    pub time_left: TimeLeft,
    /// True when the countdown has fully elapsed.
    pub past: bool,
    /// German status line, e.g. `"Bis zum Monatsende 12 Tage und 3 Stunden"`.
    pub description: String,
}

/// The four period progresses at one instant, month first.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// The instant the snapshot was taken at.
    pub at: Timestamp,
    /// Month, quarter, half-year, year.
    pub periods: [PeriodProgress; 4],
}

/// Compute one period's progress at `at`.
///
/// The elapsed ratio runs from the first day's midnight to the *last* day's
/// midnight, while the countdown runs to the last day's final second; the
/// ratio therefore saturates at 100 % over the course of the closing day.
pub fn period_progress(kind: PeriodKind, at: Timestamp) -> PeriodProgress {
    let span = PeriodSpan::of(kind, at.date());
    let start = Timestamp::start_of_day(span.start());
    let total = start
        .seconds_until(Timestamp::start_of_day(span.end()))
        .max(1);
    let elapsed = start.seconds_until(at);
    let percent = ((elapsed as Real / total as Real) * 100.0)
        .floor()
        .clamp(0.0, 100.0) as u8;

    let time_left = TimeLeft::until(at, Timestamp::end_of_day(span.end()));
    let past = time_left.is_elapsed();
    let description = if past {
        "Zeitraum bereits vergangen".to_string()
    } else {
        format!(
            "Bis zum {} {} Tage und {} Stunden",
            kind.end_word(),
            time_left.days,
            time_left.hours
        )
    };

    PeriodProgress {
        kind,
        label: kind.label(at.date()),
        percent,
        time_left,
        past,
        description,
    }
}

/// All four periods at `at`, month first.
pub fn progress_snapshot(at: Timestamp) -> ProgressSnapshot {
    ProgressSnapshot {
        at,
        periods: PERIOD_KINDS.map(|kind| period_progress(kind, at)),
    }
}
