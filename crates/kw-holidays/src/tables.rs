//! Built-in holiday reference tables.
//!
//! One reference year ships with the crate (2025), matching the
//! application's single-year scope.  All built-in entries are statutory
//! public holidays; the `nationwide` flag marks German entries that apply
//! only in some states.

use kw_core::Jurisdiction;

use crate::holiday::{HolidayKind, HolidayRow};

/// The year the built-in tables refer to.
pub const REFERENCE_YEAR: u16 = 2025;

/// German holidays 2025 as (month, day, name, nationwide).
const GERMANY_2025: &[(u8, u8, &str, bool)] = &[
    (1, 1, "Neujahr", true),
    (1, 6, "Heilige Drei Könige", false),
    (4, 18, "Karfreitag", true),
    (4, 21, "Ostermontag", true),
    (5, 1, "Tag der Arbeit", true),
    (5, 29, "Christi Himmelfahrt", true),
    (6, 9, "Pfingstmontag", true),
    (6, 19, "Fronleichnam", false),
    (8, 15, "Mariä Himmelfahrt", false),
    (10, 3, "Tag der Deutschen Einheit", true),
    (10, 31, "Reformationstag", false),
    (11, 1, "Allerheiligen", false),
    (12, 25, "Weihnachtstag", true),
    (12, 26, "Zweiter Weihnachtstag", true),
];

/// Austrian holidays 2025; every entry applies nationwide.
const AUSTRIA_2025: &[(u8, u8, &str, bool)] = &[
    (1, 1, "Neujahr", true),
    (1, 6, "Heilige Drei Könige", true),
    (4, 18, "Karfreitag", true),
    (4, 21, "Ostermontag", true),
    (5, 1, "Staatsfeiertag", true),
    (5, 29, "Christi Himmelfahrt", true),
    (6, 9, "Pfingstmontag", true),
    (6, 19, "Fronleichnam", true),
    (8, 15, "Mariä Himmelfahrt", true),
    (10, 26, "Nationalfeiertag", true),
    (11, 1, "Allerheiligen", true),
    (12, 8, "Mariä Empfängnis", true),
    (12, 25, "Weihnachtstag", true),
    (12, 26, "Stefanitag", true),
];

/// Built-in rows for the given jurisdiction.
pub fn builtin_rows(jurisdiction: Jurisdiction) -> Vec<HolidayRow> {
    let table = match jurisdiction {
        Jurisdiction::Germany => GERMANY_2025,
        Jurisdiction::Austria => AUSTRIA_2025,
    };
    table
        .iter()
        .map(|&(month, day, name, nationwide)| HolidayRow {
            month,
            day,
            name: name.to_string(),
            nationwide,
            kind: HolidayKind::Public,
        })
        .collect()
}
