//! Integration tests for week-oriented holiday lookups.
//!
//! The expected dates are the published 2025 holidays for Germany and
//! Austria.

use kw_holidays::calendar::HolidayCalendar;
use kw_holidays::holiday::HolidayKind;
use kw_time::date::Date;
use kw_time::iso_week::WeekRange;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Holiday names of the week containing `of`.
fn week_holidays(calendar: &HolidayCalendar, of: Date) -> Vec<String> {
    let range = WeekRange::of(of);
    calendar
        .holidays_in_range(range.start(), range.end())
        .into_iter()
        .map(|h| h.name)
        .collect()
}

#[test]
fn full_year_2025() {
    let germany = HolidayCalendar::germany();
    let all = germany.holidays_in_range(date(2025, 1, 1), date(2025, 12, 31));
    assert_eq!(all.len(), 14);
    assert!(all.iter().all(|h| h.kind == HolidayKind::Public));
    // Ordered by date.
    assert!(all.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[test]
fn easter_weeks_2025() {
    let germany = HolidayCalendar::germany();
    // Week of 2025-04-16 runs April 14–20 and contains Good Friday.
    assert_eq!(week_holidays(&germany, date(2025, 4, 16)), ["Karfreitag"]);
    // The following week contains Easter Monday.
    assert_eq!(week_holidays(&germany, date(2025, 4, 23)), ["Ostermontag"]);
}

#[test]
fn christmas_week_2025() {
    let austria = HolidayCalendar::austria();
    assert_eq!(
        week_holidays(&austria, date(2025, 12, 24)),
        ["Weihnachtstag", "Stefanitag"]
    );
    let germany = HolidayCalendar::germany();
    assert_eq!(
        week_holidays(&germany, date(2025, 12, 24)),
        ["Weihnachtstag", "Zweiter Weihnachtstag"]
    );
}

#[test]
fn jurisdictions_differ_in_october() {
    let germany = HolidayCalendar::germany();
    let austria = HolidayCalendar::austria();

    // Oct 3 falls in the week Sep 29 – Oct 5; Oct 26 in the week Oct 20–26.
    assert_eq!(
        week_holidays(&germany, date(2025, 10, 1)),
        ["Tag der Deutschen Einheit"]
    );
    assert!(week_holidays(&austria, date(2025, 10, 1)).is_empty());

    assert_eq!(
        week_holidays(&austria, date(2025, 10, 22)),
        ["Nationalfeiertag"]
    );
    assert!(week_holidays(&germany, date(2025, 10, 22)).is_empty());
}

#[test]
fn holiday_free_week_is_empty_for_both() {
    let germany = HolidayCalendar::germany();
    let austria = HolidayCalendar::austria();
    let mid_february = date(2025, 2, 12);
    assert!(week_holidays(&germany, mid_february).is_empty());
    assert!(week_holidays(&austria, mid_february).is_empty());
}

#[test]
fn queries_agree_inside_the_reference_year() {
    // For a span inside the reference year, day-by-day recurrence matching
    // and the resolved-date filter return the same holidays.
    let austria = HolidayCalendar::austria();
    let range = WeekRange::of(date(2025, 12, 24));
    assert_eq!(
        austria.occurrences_in(range.start(), range.end()),
        austria.holidays_in_range(range.start(), range.end())
    );
}

#[test]
fn nationwide_flags_survive_lookup() {
    let germany = HolidayCalendar::germany();
    // Epiphany week: the entry exists but is not nationwide in Germany.
    let range = WeekRange::of(date(2025, 1, 8));
    let hits = germany.holidays_in_range(range.start(), range.end());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Heilige Drei Könige");
    assert!(!hits[0].nationwide);

    let austria = HolidayCalendar::austria();
    let hits = austria.holidays_in_range(range.start(), range.end());
    assert_eq!(hits.len(), 1);
    assert!(hits[0].nationwide);
}
