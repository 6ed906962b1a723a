//! Wall-clock access and second-resolution timestamps.
//!
//! [`today`] honors the process-wide reference date in
//! [`kw_core::Settings`], falling back to the real local date.  [`now`]
//! always reads the real clock; countdown math works on [`Timestamp`]
//! values, which carry a calendar day plus a second-of-day.

use chrono::{Local, Timelike};
use kw_core::settings::Settings;

use crate::date::Date;

/// Seconds in a calendar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar day plus a second-of-day in `[0, 86_399]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    date: Date,
    second_of_day: u32,
}

impl Timestamp {
    /// A timestamp at `second_of_day` seconds past midnight of `date`.
    /// Values past 86 399 are clamped to the last second of the day.
    pub fn new(date: Date, second_of_day: u32) -> Self {
        Timestamp {
            date,
            second_of_day: second_of_day.min(SECONDS_PER_DAY as u32 - 1),
        }
    }

    /// Midnight at the start of `date`.
    pub fn start_of_day(date: Date) -> Self {
        Self::new(date, 0)
    }

    /// 23:59:59 on `date`.
    pub fn end_of_day(date: Date) -> Self {
        Self::new(date, SECONDS_PER_DAY as u32 - 1)
    }

    /// The calendar day.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Seconds past midnight (0–86 399).
    pub fn second_of_day(&self) -> u32 {
        self.second_of_day
    }

    /// Signed seconds from `self` until `other`.
    pub fn seconds_until(&self, other: Timestamp) -> i64 {
        i64::from(other.date - self.date) * SECONDS_PER_DAY + i64::from(other.second_of_day)
            - i64::from(self.second_of_day)
    }

    /// The time of day as `"HH:MM:SS"`.
    pub fn format_time(&self) -> String {
        let s = self.second_of_day;
        format!("{:02}:{:02}:{:02}", s / 3600, s / 60 % 60, s % 60)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.format_time())
    }
}

/// The current local date, honoring the `Settings` reference-date override.
pub fn today() -> Date {
    if let Some(serial) = Settings::instance().today_serial() {
        if let Ok(date) = Date::from_serial(serial) {
            return date;
        }
    }
    now().date()
}

/// The current local timestamp from the system clock (never overridden).
pub fn now() -> Timestamp {
    let local = Local::now();
    let date =
        Date::try_from(local.date_naive()).expect("system clock within supported date range");
    Timestamp::new(date, local.num_seconds_from_midnight())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kw_core::settings::ScopedToday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn seconds_until_spans_days() {
        let a = Timestamp::new(date(2025, 5, 14), 10 * 3600);
        let b = Timestamp::end_of_day(date(2025, 5, 14));
        assert_eq!(a.seconds_until(b), 14 * 3600 - 1);

        let c = Timestamp::start_of_day(date(2025, 5, 16));
        assert_eq!(a.seconds_until(c), 2 * SECONDS_PER_DAY - 10 * 3600);
        // Reversed order is negative.
        assert_eq!(c.seconds_until(a), -(2 * SECONDS_PER_DAY - 10 * 3600));
    }

    #[test]
    fn second_of_day_is_clamped() {
        let t = Timestamp::new(date(2025, 5, 14), 90_000);
        assert_eq!(t.second_of_day(), 86_399);
        assert_eq!(t.format_time(), "23:59:59");
    }

    #[test]
    fn formats_time_and_display() {
        let t = Timestamp::new(date(2025, 5, 14), 9 * 3600 + 5 * 60 + 7);
        assert_eq!(t.format_time(), "09:05:07");
        assert_eq!(t.to_string(), "2025-05-14 09:05:07");
    }

    // Settings is a process-wide singleton; keep every override inside one
    // test so parallel execution cannot interleave.
    #[test]
    fn today_honors_the_override() {
        let pinned = date(2025, 5, 14);
        {
            let _guard = ScopedToday::new(pinned.serial());
            assert_eq!(today(), pinned);
        }
        // With the override gone, today() falls back to the real clock.
        assert_eq!(today(), now().date());
    }
}
