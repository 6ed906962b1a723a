//! `HolidayCalendar` — a jurisdiction's holiday table with range queries.

use kw_core::errors::Result;
use kw_core::{ensure, Jurisdiction};
use kw_time::date::{days_in_month, Date};

use crate::holiday::{Holiday, HolidayRow};
use crate::tables::{builtin_rows, REFERENCE_YEAR};

/// A read-only set of holidays for one jurisdiction, resolved onto a single
/// reference year.
///
/// Only that year's dates exist as concrete [`Holiday`] entries, so range
/// queries for other years come back empty — a documented single-year
/// limitation, not an error.  Year-independent questions go through
/// [`recurs_on`](Self::recurs_on), which matches rows by month/day.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    jurisdiction: Jurisdiction,
    reference_year: u16,
    rows: Vec<HolidayRow>,
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// The built-in German table for the shipped reference year.
    pub fn germany() -> Self {
        Self::from_rows(
            Jurisdiction::Germany,
            REFERENCE_YEAR,
            builtin_rows(Jurisdiction::Germany),
        )
        .expect("built-in table rows are valid")
    }

    /// The built-in Austrian table for the shipped reference year.
    pub fn austria() -> Self {
        Self::from_rows(
            Jurisdiction::Austria,
            REFERENCE_YEAR,
            builtin_rows(Jurisdiction::Austria),
        )
        .expect("built-in table rows are valid")
    }

    /// The built-in table for `jurisdiction`.
    pub fn for_jurisdiction(jurisdiction: Jurisdiction) -> Self {
        match jurisdiction {
            Jurisdiction::Germany => Self::germany(),
            Jurisdiction::Austria => Self::austria(),
        }
    }

    /// Build a calendar from injected rows.
    ///
    /// A February 29 row is accepted but resolves to a concrete holiday only
    /// when the reference year is a leap year; in other years it survives
    /// solely as a recurrence pattern.
    ///
    /// # Errors
    /// Rejects rows whose month/day pair cannot exist in any year.
    pub fn from_rows(
        jurisdiction: Jurisdiction,
        reference_year: u16,
        rows: Vec<HolidayRow>,
    ) -> Result<Self> {
        let mut holidays = Vec::with_capacity(rows.len());
        for row in &rows {
            ensure!(
                (1..=12).contains(&row.month),
                "holiday month {} out of range for {:?}",
                row.month,
                row.name
            );
            let cap = if row.month == 2 {
                29
            } else {
                days_in_month(reference_year, row.month)
            };
            ensure!(
                row.day >= 1 && row.day <= cap,
                "holiday day {}-{} does not exist ({:?})",
                row.month,
                row.day,
                row.name
            );
            if row.day <= days_in_month(reference_year, row.month) {
                holidays.push(Holiday {
                    date: Date::from_ymd(reference_year, row.month, row.day)?,
                    name: row.name.clone(),
                    nationwide: row.nationwide,
                    kind: row.kind,
                });
            }
        }
        holidays.sort_by_key(|h| h.date);
        Ok(Self {
            jurisdiction,
            reference_year,
            rows,
            holidays,
        })
    }

    /// The jurisdiction this table belongs to.
    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    /// The year the table's concrete dates refer to.
    pub fn reference_year(&self) -> u16 {
        self.reference_year
    }

    /// All resolved holidays, ordered by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Holidays falling within `[start, end]`, both inclusive.
    ///
    /// Spans outside the reference year simply yield nothing.
    pub fn holidays_in_range(&self, start: Date, end: Date) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter(|h| start <= h.date && h.date <= end)
            .cloned()
            .collect()
    }

    /// Whether any table row recurs on `date`'s month/day, regardless of
    /// year.  A February 29 row therefore never matches in a non-leap year.
    pub fn recurs_on(&self, date: Date) -> bool {
        self.rows
            .iter()
            .any(|row| row.month == date.month() && row.day == date.day_of_month())
    }

    /// Holidays recurring within `[start, end]`, dated in the queried years.
    ///
    /// Unlike [`holidays_in_range`](Self::holidays_in_range) this matches
    /// rows day by day, so it works for any year and a week straddling New
    /// Year picks up entries from both sides of the boundary.  Meant for
    /// week-sized spans; a span covering a date twice lists it twice.
    ///
    /// The scan steps with [`Date::offset`], so an `end` that spills past
    /// [`Date::MAX`] — the last ISO week of the supported range runs into
    /// January 2200 — is walked through rather than panicked over.
    pub fn occurrences_in(&self, start: Date, end: Date) -> Vec<Holiday> {
        let mut hits = Vec::new();
        let mut day = start;
        while day <= end {
            for row in &self.rows {
                if row.month == day.month() && row.day == day.day_of_month() {
                    hits.push(Holiday {
                        date: day,
                        name: row.name.clone(),
                        nationwide: row.nationwide,
                        kind: row.kind,
                    });
                }
            }
            if day == end {
                break;
            }
            day = day.offset(1);
        }
        hits
    }

    /// Whether the span `[start, end]` offers a bridge day (a single workday
    /// wedged between a holiday and a weekend).
    ///
    /// Always `false` for now; adjacency detection has not been specified.
    pub fn has_bridge_day(&self, _start: Date, _end: Date) -> bool {
        false
    }

    /// Whether the span `[start, end]` contains a long weekend.
    ///
    /// Always `false` for now, like [`has_bridge_day`](Self::has_bridge_day).
    pub fn has_long_weekend(&self, _start: Date, _end: Date) -> bool {
        false
    }
}
