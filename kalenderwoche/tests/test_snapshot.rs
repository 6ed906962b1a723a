//! End-to-end checks of the selection/snapshot pair with a pinned today.

use approx::assert_relative_eq;
use kalenderwoche::core::settings::ScopedToday;
use kalenderwoche::core::Jurisdiction;
use kalenderwoche::time::Date;
use kalenderwoche::Selection;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// Settings is a process-wide singleton; the pinned reference date must stay
// inside a single test.
#[test]
fn selection_drives_the_week_view() {
    let pinned = date(2025, 5, 14);
    let _guard = ScopedToday::new(pinned.serial());

    let mut selection = Selection::new();
    assert_eq!(selection.selected(), pinned);
    assert_eq!(selection.jurisdiction(), Jurisdiction::Austria);
    assert_relative_eq!(selection.hours_per_day(), 8.0);

    let snapshot = selection.snapshot();
    assert_eq!(snapshot.week.to_string(), "KW 20/2025");
    assert_eq!(snapshot.formatted_date, "14. Mai 2025");
    assert_eq!(snapshot.day_name, "Mittwoch");
    assert_eq!(snapshot.week_label, "12. - 18. Mai 2025");
    assert_eq!(snapshot.description, "Aktuelle Kalenderwoche");
    assert_eq!(snapshot.quarter, 2);
    assert_eq!(snapshot.days_until_weekend, 3);
    assert!(snapshot.holidays_de.is_empty());
    assert!(snapshot.holidays_at.is_empty());
    assert_eq!(snapshot.zodiac.name, "Stier");
    assert_eq!(snapshot.sun_times.accuracy, "±10-15 Min");
    assert_eq!(snapshot.motto, "Wer zuletzt lacht, lacht am besten.");
    assert!(snapshot.fact.starts_with("17. Mai 1792"));
    assert_eq!(snapshot.working_time.working_days_in_week, 5);
    assert_relative_eq!(snapshot.working_time.working_hours_in_week, 40.0);

    // Easter week under the German calendar: Good Friday shortens it.
    selection.set_date(date(2025, 4, 16));
    selection.toggle_jurisdiction();
    assert_eq!(selection.jurisdiction(), Jurisdiction::Germany);
    let snapshot = selection.snapshot();
    assert_eq!(snapshot.week.number, 16);
    assert_eq!(snapshot.description, "Kalenderwoche vor 4 Wochen");
    assert_eq!(snapshot.holidays_de.len(), 1);
    assert_eq!(snapshot.holidays_de[0].name, "Karfreitag");
    assert_eq!(snapshot.holidays_de[0].date, date(2025, 4, 18));
    assert!(snapshot.holidays_de[0].nationwide);
    // Good Friday is a holiday on both sides of the border.
    assert_eq!(snapshot.holidays_at.len(), 1);
    assert_eq!(snapshot.working_time.working_days_in_week, 4);
    assert_relative_eq!(snapshot.working_time.working_hours_in_week, 32.0);

    // Week navigation moves in whole weeks and ignores out-of-range steps.
    selection.navigate_weeks(-2);
    assert_eq!(selection.selected(), date(2025, 4, 2));
    selection.set_date(date(2199, 12, 24));
    selection.navigate_weeks(1);
    assert_eq!(selection.selected(), date(2199, 12, 31));
    selection.navigate_weeks(1);
    assert_eq!(selection.selected(), date(2199, 12, 31), "step past MAX is ignored");

    // The clamped selection still snapshots: its week spills into January
    // 2200, and the holiday scan picks up New Year on the far side.
    let snapshot = selection.snapshot();
    assert_eq!(snapshot.week.to_string(), "KW 1/2200");
    assert_eq!(snapshot.week_label, "30. - 5. Januar 2200");
    assert_eq!(snapshot.day_name, "Dienstag");
    assert_eq!(snapshot.holidays_de.len(), 1);
    assert_eq!(snapshot.holidays_at.len(), 1);
    assert_eq!(snapshot.holidays_at[0].name, "Neujahr");
    assert_eq!(snapshot.holidays_at[0].date.to_string(), "2200-01-01");
    assert_eq!(snapshot.working_time.working_days_in_week, 4);

    selection.reset_to_today();
    assert_eq!(selection.selected(), pinned);

    // Workday length accepts a decimal comma and falls back on junk input.
    selection.set_hours_per_day("7,7");
    assert_relative_eq!(selection.hours_per_day(), 7.7);
    selection.set_hours_per_day("junk");
    assert_relative_eq!(selection.hours_per_day(), 8.0);
}
