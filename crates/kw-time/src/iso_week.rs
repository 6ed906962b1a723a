//! ISO-8601 week arithmetic.
//!
//! Weeks run Monday through Sunday.  Week 1 of a year is the week containing
//! the first Thursday of that year (equivalently, the week containing
//! January 4), so the first days of January can belong to the last week of
//! the previous week-year and late-December days to week 1 of the next.
//! Years have either 52 or 53 ISO weeks.

use kw_core::errors::Result;

use crate::date::{serial_from_ymd, Date};
use crate::weekday::Weekday;

/// An ISO-8601 week: a week-year plus a week number in `[1, 53]`.
///
/// The week-year can differ from the calendar year of a date near the year
/// boundary; code that labels a week must use this type's `year`, not the
/// date's calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoWeek {
    /// The ISO week-year.
    pub year: u16,
    /// The week number within `year` (1–53).
    pub number: u8,
}

impl IsoWeek {
    /// The ISO week containing `date`.
    pub fn of(date: Date) -> Self {
        IsoWeek {
            year: week_year(date),
            number: week_number(date),
        }
    }
}

impl std::fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KW {}/{}", self.number, self.year)
    }
}

/// The Monday-to-Sunday span containing a given date.
///
/// The last week of the supported range may reach a few days past
/// [`Date::MAX`]; those days stay well-formed for comparison and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    start: Date,
    end: Date,
}

impl WeekRange {
    /// The week containing `date`.
    pub fn of(date: Date) -> Self {
        let start = monday_of(date);
        WeekRange {
            start,
            end: start.offset(6),
        }
    }

    /// Monday of the week.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Sunday of the week.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether `date` falls within the week.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The seven days of the week, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let start = self.start;
        (0..7).map(move |i| start.offset(i))
    }
}

/// The Monday on or before `date`.
pub fn monday_of(date: Date) -> Date {
    date.offset(-i32::from(date.weekday().ordinal() - 1))
}

/// The ISO week-year of `date` — the calendar year of the Thursday in
/// `date`'s week.
pub fn week_year(date: Date) -> u16 {
    monday_of(date).offset(3).year()
}

/// The ISO week number of `date`, in `[1, 53]`.
pub fn week_number(date: Date) -> u8 {
    let monday = monday_of(date);
    let thursday = monday.offset(3);
    // Week 1 is the week containing January 4 of the week-year.
    let jan4 = Date::from_serial_unchecked(serial_from_ymd(thursday.year(), 1, 4));
    let week1_monday = monday_of(jan4);
    ((monday - week1_monday) / 7 + 1) as u8
}

/// Number of ISO weeks (52 or 53) in the given week-year.
pub fn weeks_in_year(year: u16) -> Result<u8> {
    // December 28 always lies in the last ISO week of its year.
    Ok(week_number(Date::from_ymd(year, 12, 28)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn monday_of_snaps_back() {
        // 2025-05-14 is a Wednesday; its week starts 2025-05-12.
        assert_eq!(monday_of(date(2025, 5, 14)), date(2025, 5, 12));
        // A Monday maps to itself.
        assert_eq!(monday_of(date(2025, 5, 12)), date(2025, 5, 12));
        // A Sunday maps back six days.
        assert_eq!(monday_of(date(2025, 5, 18)), date(2025, 5, 12));
    }

    #[test]
    fn week_numbers_at_year_boundaries() {
        // The week 2024-12-30 .. 2025-01-05 is week 1 of 2025.
        assert_eq!(week_number(date(2024, 12, 30)), 1);
        assert_eq!(week_year(date(2024, 12, 30)), 2025);
        assert_eq!(week_number(date(2025, 1, 1)), 1);
        assert_eq!(week_year(date(2025, 1, 1)), 2025);
        // 2024-12-29 is the Sunday closing week 52 of 2024.
        assert_eq!(week_number(date(2024, 12, 29)), 52);
        assert_eq!(week_year(date(2024, 12, 29)), 2024);
    }

    #[test]
    fn week_53_years() {
        // 2020 and 2026 have 53 ISO weeks.
        assert_eq!(week_number(date(2020, 12, 31)), 53);
        assert_eq!(week_year(date(2021, 1, 1)), 2020);
        assert_eq!(week_number(date(2021, 1, 1)), 53);
        assert_eq!(week_number(date(2021, 1, 4)), 1);
        assert_eq!(week_year(date(2021, 1, 4)), 2021);
        assert_eq!(week_number(date(2026, 12, 31)), 53);
        assert_eq!(week_year(date(2027, 1, 1)), 2026);
        // 1999-01-01 belongs to week 53 of 1998.
        assert_eq!(week_number(date(1999, 1, 1)), 53);
        assert_eq!(week_year(date(1999, 1, 1)), 1998);
    }

    #[test]
    fn weeks_in_year_table() {
        let cases = [(2020, 53), (2021, 52), (2025, 52), (2026, 53), (2004, 53)];
        for (year, weeks) in cases {
            assert_eq!(weeks_in_year(year).unwrap(), weeks, "year {year}");
        }
    }

    #[test]
    fn week_range_shape() {
        let range = WeekRange::of(date(2025, 5, 14));
        assert_eq!(range.start(), date(2025, 5, 12));
        assert_eq!(range.end(), date(2025, 5, 18));
        assert!(range.contains(date(2025, 5, 14)));
        assert!(!range.contains(date(2025, 5, 19)));
        let days: Vec<Date> = range.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], range.start());
        assert_eq!(days[6], range.end());
    }

    #[test]
    fn week_at_end_of_supported_range() {
        // The week containing Date::MAX spills into January 2200 but must
        // still number and label correctly.
        let range = WeekRange::of(Date::MAX);
        assert_eq!(range.start(), date(2199, 12, 30));
        assert_eq!(range.start().weekday(), Weekday::Monday);
        assert_eq!(week_year(Date::MAX), 2200);
        assert_eq!(week_number(Date::MAX), 1);
    }

    #[test]
    fn iso_week_display() {
        let week = IsoWeek::of(date(2025, 5, 14));
        assert_eq!(week, IsoWeek { year: 2025, number: 20 });
        assert_eq!(week.to_string(), "KW 20/2025");
    }
}
