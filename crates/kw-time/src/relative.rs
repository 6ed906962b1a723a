//! Relative description of a week against a reference date.

use crate::date::Date;
use crate::iso_week::monday_of;

/// German description of where the week containing `selected` lies relative
/// to the week containing `reference`.
///
/// The distance is counted in whole weeks between the two Mondays, so every
/// day of a week yields the same description.  Up to four weeks the text
/// counts weeks; beyond that it buckets into months by dividing the week
/// count by four — a deliberate approximation, not calendar month
/// arithmetic.
pub fn describe_week(selected: Date, reference: Date) -> String {
    let weeks = (monday_of(selected) - monday_of(reference)) / 7;
    if weeks == 0 {
        return "Aktuelle Kalenderwoche".to_string();
    }
    let count = weeks.unsigned_abs();
    let (count, unit) = if count <= 4 {
        (count, if count == 1 { "Woche" } else { "Wochen" })
    } else {
        let months = count / 4;
        (months, if months == 1 { "Monat" } else { "Monaten" })
    };
    if weeks < 0 {
        format!("Kalenderwoche vor {count} {unit}")
    } else {
        format!("Kalenderwoche in {count} {unit}")
    }
}
