//! Selection state: which day, whose holidays, how long a workday is.
//!
//! [`Selection`] is the small mutable core an application drives — week
//! navigation, jurisdiction toggling, workday length — while everything
//! displayed is derived from it via [`snapshot`](Selection::snapshot).

use kw_core::{Jurisdiction, Real};
use kw_time::clock;
use kw_time::date::Date;
use kw_worktime::hours::{parse_hours_per_day, DEFAULT_HOURS_PER_DAY};

use crate::snapshot::WeekSnapshot;

/// The user-controlled inputs of the week view.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    selected: Date,
    jurisdiction: Jurisdiction,
    hours_per_day: Real,
}

impl Selection {
    /// A selection of today, in the default jurisdiction, with the default
    /// workday length.
    pub fn new() -> Self {
        Selection {
            selected: clock::today(),
            jurisdiction: Jurisdiction::default(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }

    /// The selected day.
    pub fn selected(&self) -> Date {
        self.selected
    }

    /// The active jurisdiction.
    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    /// The configured workday length in hours.
    pub fn hours_per_day(&self) -> Real {
        self.hours_per_day
    }

    /// Select a specific day.
    pub fn set_date(&mut self, date: Date) {
        self.selected = date;
    }

    /// Move the selection by whole weeks, negative for backwards.
    ///
    /// A step that would leave the supported date range is ignored and the
    /// current selection stays put.
    pub fn navigate_weeks(&mut self, weeks: i32) {
        if let Ok(date) = self.selected.add_days(weeks.saturating_mul(7)) {
            self.selected = date;
        }
    }

    /// Jump back to today.
    pub fn reset_to_today(&mut self) {
        self.selected = clock::today();
    }

    /// Switch to the other jurisdiction.
    pub fn toggle_jurisdiction(&mut self) {
        self.jurisdiction = self.jurisdiction.toggled();
    }

    /// Set the workday length from free-form user input.
    ///
    /// Accepts a decimal comma; blank or unparsable input falls back to the
    /// default of [`DEFAULT_HOURS_PER_DAY`] hours.
    pub fn set_hours_per_day(&mut self, input: &str) {
        self.hours_per_day = parse_hours_per_day(input);
    }

    /// Compute the full week snapshot for the current selection, described
    /// relative to today.
    pub fn snapshot(&self) -> WeekSnapshot {
        WeekSnapshot::compute(
            self.selected,
            clock::today(),
            self.jurisdiction,
            self.hours_per_day,
        )
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}
