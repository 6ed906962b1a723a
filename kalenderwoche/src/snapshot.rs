//! One-call aggregation of everything the week view displays.

use kw_astro::sun::{self, SunTimes};
use kw_astro::zodiac::{self, ZodiacSign};
use kw_core::{Jurisdiction, Real};
use kw_facts::{fact_for_week, motto_for_week};
use kw_holidays::calendar::HolidayCalendar;
use kw_holidays::holiday::Holiday;
use kw_progress::quarter_of;
use kw_time::date::Date;
use kw_time::format;
use kw_time::iso_week::{IsoWeek, WeekRange};
use kw_time::relative;
use kw_worktime::working::{working_time, WorkingTimeSummary};

/// Every figure shown for one selected day and the week around it.
///
/// A snapshot is a plain value: compute it once per selection change and
/// render from it.  The only live part of the view, the second-by-second
/// period countdown, comes from `kw_progress` instead.
#[derive(Debug, Clone)]
pub struct WeekSnapshot {
    /// The selected day.
    pub selected: Date,
    /// Its ISO week.
    pub week: IsoWeek,
    /// Monday through Sunday around the selected day.
    pub range: WeekRange,
    /// The selected day in long German form, `"14. Mai 2025"`.
    pub formatted_date: String,
    /// German weekday name of the selected day.
    pub day_name: &'static str,
    /// The week span in German, `"12. - 18. Mai 2025"`.
    pub week_label: String,
    /// Relative description against the reference day, e.g.
    /// `"Kalenderwoche in 3 Wochen"`.
    pub description: String,
    /// Quarter (1–4) of the selected day.
    pub quarter: u8,
    /// Days from the selected day to the coming Saturday (0 on Saturday).
    pub days_until_weekend: u8,
    /// German holidays falling inside the week.
    pub holidays_de: Vec<Holiday>,
    /// Austrian holidays falling inside the week.
    pub holidays_at: Vec<Holiday>,
    /// Zodiac sign of the selected day.
    pub zodiac: &'static ZodiacSign,
    /// Sunrise/sunset estimate for the selected day.
    pub sun_times: SunTimes,
    /// Proverb for the week number.
    pub motto: &'static str,
    /// Historical fact for the week number.
    pub fact: &'static str,
    /// Working-day and -hour figures for the active jurisdiction.
    pub working_time: WorkingTimeSummary,
}

impl WeekSnapshot {
    /// Compute the snapshot for `selected`.
    ///
    /// `reference` anchors the relative description (normally today);
    /// `jurisdiction` picks whose holidays drive the working-time figures.
    /// Both holiday lists are always populated, since the view shows the
    /// neighbor country's entries alongside the active one's.
    pub fn compute(
        selected: Date,
        reference: Date,
        jurisdiction: Jurisdiction,
        hours_per_day: Real,
    ) -> Self {
        let week = IsoWeek::of(selected);
        let range = WeekRange::of(selected);

        let germany = HolidayCalendar::germany();
        let austria = HolidayCalendar::austria();
        let active = match jurisdiction {
            Jurisdiction::Germany => &germany,
            Jurisdiction::Austria => &austria,
        };
        let working = working_time(&range, selected, active, hours_per_day);

        WeekSnapshot {
            selected,
            week,
            formatted_date: format::format_long(selected),
            day_name: format::day_name(selected),
            week_label: format::format_week_range(&range),
            description: relative::describe_week(selected, reference),
            quarter: quarter_of(selected),
            days_until_weekend: selected.weekday().days_until_weekend(),
            holidays_de: germany.occurrences_in(range.start(), range.end()),
            holidays_at: austria.occurrences_in(range.start(), range.end()),
            zodiac: zodiac::sign_for(selected),
            sun_times: sun::estimate(selected),
            motto: motto_for_week(week.number),
            fact: fact_for_week(week.number),
            working_time: working,
            range,
        }
    }
}
