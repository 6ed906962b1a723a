//! German date formatting.
//!
//! All display strings are German with a fixed spelling; there is no locale
//! lookup at runtime.  Formatting never fails.

use crate::date::Date;
use crate::iso_week::WeekRange;
use crate::month::Month;

/// Long German date, e.g. `"5. Mai 2025"` (day unpadded).
pub fn format_long(date: Date) -> String {
    format!(
        "{}. {} {}",
        date.day_of_month(),
        month_name(date),
        date.year()
    )
}

/// Short numeric German date, e.g. `"05.05.2025"`.
pub fn format_short(date: Date) -> String {
    format!(
        "{:02}.{:02}.{}",
        date.day_of_month(),
        date.month(),
        date.year()
    )
}

/// German day name, e.g. `"Montag"`.
pub fn day_name(date: Date) -> &'static str {
    date.weekday().name_de()
}

/// Week span label, e.g. `"12. - 18. Mai 2025"`.
///
/// Month and year are taken from the closing Sunday, so a week crossing a
/// month boundary reads `"28. - 4. Mai 2025"`.
pub fn format_week_range(range: &WeekRange) -> String {
    let end = range.end();
    format!(
        "{}. - {}. {} {}",
        range.start().day_of_month(),
        end.day_of_month(),
        month_name(end),
        end.year()
    )
}

fn month_name(date: Date) -> &'static str {
    Month::from_number(date.month())
        .expect("month always in 1..=12")
        .name_de()
}
