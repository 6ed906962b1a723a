//! Working-day and working-time calculations.

use kw_core::Real;
use kw_holidays::calendar::HolidayCalendar;
use kw_time::date::Date;
use kw_time::iso_week::WeekRange;

/// Whether `date` is a working day under `calendar`'s jurisdiction.
///
/// Weekends are never working days.  Holidays match by month/day recurrence,
/// so the single-year reference table answers for any queried year.
pub fn is_working_day(date: Date, calendar: &HolidayCalendar) -> bool {
    date.weekday().is_weekday() && !calendar.recurs_on(date)
}

/// Aggregate working-day and working-hour counts for a selected week and its
/// calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingTimeSummary {
    /// Working days in the selected week.
    pub working_days_in_week: u32,
    /// Working hours in the selected week.
    pub working_hours_in_week: Real,
    /// Working days in the selected date's calendar year.
    pub total_working_days: u32,
    /// Working hours in the selected date's calendar year.
    pub total_working_hours: Real,
    /// Working days on or before the selected date.
    pub worked_days: u32,
    /// Hours corresponding to `worked_days`.
    pub worked_hours: Real,
    /// Working days strictly after the selected date.
    pub remaining_working_days: u32,
    /// Hours corresponding to `remaining_working_days`.
    pub remaining_working_hours: Real,
}

impl WorkingTimeSummary {
    /// Share of the year's working days already worked, rounded to whole
    /// percent.  Zero when the year has no working days at all.
    pub fn worked_percent(&self) -> u8 {
        if self.total_working_days == 0 {
            return 0;
        }
        ((self.worked_days as Real / self.total_working_days as Real) * 100.0).round() as u8
    }
}

/// Compute the summary for `week` and the calendar year of `selected`.
///
/// The year scan runs January 1 through December 31 of `selected`'s year;
/// days up to and including `selected` count as worked, later days as
/// remaining.  `hours_per_day` scales day counts into hours unchanged, so a
/// negative input yields negative hour totals.
pub fn working_time(
    week: &WeekRange,
    selected: Date,
    calendar: &HolidayCalendar,
    hours_per_day: Real,
) -> WorkingTimeSummary {
    let working_days_in_week = week
        .days()
        .filter(|&day| is_working_day(day, calendar))
        .count() as u32;

    let year = selected.year();
    let january_first = Date::from_ymd(year, 1, 1).expect("Jan 1 exists in a supported year");
    let december_last = Date::from_ymd(year, 12, 31).expect("Dec 31 exists in a supported year");

    let mut total_working_days = 0u32;
    let mut worked_days = 0u32;
    let mut day = january_first;
    loop {
        if is_working_day(day, calendar) {
            total_working_days += 1;
            if day <= selected {
                worked_days += 1;
            }
        }
        if day == december_last {
            break;
        }
        day = day + 1;
    }
    let remaining_working_days = total_working_days - worked_days;

    WorkingTimeSummary {
        working_days_in_week,
        working_hours_in_week: Real::from(working_days_in_week) * hours_per_day,
        total_working_days,
        total_working_hours: Real::from(total_working_days) * hours_per_day,
        worked_days,
        worked_hours: Real::from(worked_days) * hours_per_day,
        remaining_working_days,
        remaining_working_hours: Real::from(remaining_working_days) * hours_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_never_working_days() {
        let austria = HolidayCalendar::austria();
        // 2025-05-17 is a Saturday, 2025-05-18 a Sunday.
        assert!(!is_working_day(date(2025, 5, 17), &austria));
        assert!(!is_working_day(date(2025, 5, 18), &austria));
        assert!(is_working_day(date(2025, 5, 16), &austria));
    }

    #[test]
    fn holidays_match_by_recurrence_in_any_year() {
        let germany = HolidayCalendar::germany();
        // Oct 3 is a weekday in both years; the table stores only 2025.
        assert!(!is_working_day(date(2025, 10, 3), &germany));
        assert!(!is_working_day(date(2030, 10, 3), &germany));

        let austria = HolidayCalendar::austria();
        // Oct 3 is no holiday in Austria.
        assert!(is_working_day(date(2030, 10, 3), &austria));
    }

    #[test]
    fn worked_percent_rounds_and_guards_zero() {
        let mut summary = WorkingTimeSummary {
            working_days_in_week: 5,
            working_hours_in_week: 40.0,
            total_working_days: 249,
            total_working_hours: 1992.0,
            worked_days: 121,
            worked_hours: 968.0,
            remaining_working_days: 128,
            remaining_working_hours: 1024.0,
        };
        // 121 / 249 = 48.59 % → 49.
        assert_eq!(summary.worked_percent(), 49);

        summary.total_working_days = 0;
        assert_eq!(summary.worked_percent(), 0);
    }
}
