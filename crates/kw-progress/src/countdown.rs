//! Countdown decomposition towards a target instant.

use kw_time::clock::Timestamp;

/// Remaining whole days/hours/minutes/seconds until a target instant.
///
/// Components are floored and clamped to zero; the countdown reads zero in
/// all four fields exactly when the target has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    /// Whole days remaining.
    pub days: u32,
    /// Hours remaining after `days` (0–23).
    pub hours: u8,
    /// Minutes remaining after `hours` (0–59).
    pub minutes: u8,
    /// Seconds remaining after `minutes` (0–59).
    pub seconds: u8,
}

impl TimeLeft {
    /// Decompose the seconds from `from` until `until`, clamped at zero.
    pub fn until(from: Timestamp, until: Timestamp) -> Self {
        let total = from.seconds_until(until).max(0);
        TimeLeft {
            days: (total / 86_400) as u32,
            hours: (total / 3_600 % 24) as u8,
            minutes: (total / 60 % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// True when every component has reached zero.
    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
