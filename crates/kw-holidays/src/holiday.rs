//! Holiday data model.

use serde::Deserialize;

use kw_time::date::Date;

/// Classification of a holiday entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// Statutory public holiday.
    Public,
    /// Widely observed, but not work-free.
    Observance,
    /// School holiday.
    School,
}

/// A single holiday resolved onto a concrete date of a reference year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// The resolved date.
    pub date: Date,
    /// German display name.
    pub name: String,
    /// Whether the holiday applies nationwide (as opposed to only some
    /// states).
    pub nationwide: bool,
    /// Entry classification.
    pub kind: HolidayKind,
}

/// An unresolved table row: a month/day recurrence pattern plus metadata.
///
/// Rows are what gets injected (typically deserialized from configuration);
/// a [`HolidayCalendar`](crate::calendar::HolidayCalendar) resolves them
/// onto its reference year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayRow {
    /// Calendar month (1–12).
    pub month: u8,
    /// Day of month (1–31).
    pub day: u8,
    /// German display name.
    pub name: String,
    /// Whether the holiday applies nationwide.
    #[serde(default = "default_nationwide")]
    pub nationwide: bool,
    /// Entry classification.
    #[serde(default = "default_kind")]
    pub kind: HolidayKind,
}

fn default_nationwide() -> bool {
    true
}

fn default_kind() -> HolidayKind {
    HolidayKind::Public
}
