//! Simplified central-European daylight-saving rule.
//!
//! Daylight-saving time runs from the last Sunday of March through the day
//! before the last Sunday of October.  The rule works on whole days and
//! ignores the 01:00 UTC switch instant; the switch day itself already
//! counts as the new regime.

use kw_time::date::Date;
use kw_time::weekday::Weekday;

/// Whether daylight-saving time (CEST) is in effect on `date`.
pub fn is_daylight_saving(date: Date) -> bool {
    let month = date.month();
    if !(3..=10).contains(&month) {
        return false;
    }
    if (4..=9).contains(&month) {
        return true;
    }
    let last_sunday = date.last_in_month(Weekday::Sunday).day_of_month();
    if month == 3 {
        date.day_of_month() >= last_sunday
    } else {
        date.day_of_month() < last_sunday
    }
}

/// UTC offset in whole hours under the simplified rule: CET = 1, CEST = 2.
pub fn utc_offset_hours(date: Date) -> u8 {
    if is_daylight_saving(date) {
        2
    } else {
        1
    }
}
