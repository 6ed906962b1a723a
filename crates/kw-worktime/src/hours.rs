//! Hours-per-day input parsing.

use kw_core::Real;

/// Default daily working hours when the input is unusable.
pub const DEFAULT_HOURS_PER_DAY: Real = 8.0;

/// Parse a decimal hours-per-day string.
///
/// Accepts `.` or `,` as the decimal separator and ignores surrounding
/// whitespace.  Empty, unparseable, non-finite, and zero input all fall back
/// to [`DEFAULT_HOURS_PER_DAY`]; any other value — including a negative one —
/// is returned as parsed.
pub fn parse_hours_per_day(input: &str) -> Real {
    let normalized = input.trim().replace(',', ".");
    match normalized.parse::<Real>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => DEFAULT_HOURS_PER_DAY,
    }
}
