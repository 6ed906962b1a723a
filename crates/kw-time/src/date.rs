//! `Date` type.
//!
//! Dates are a serial number of days in the proleptic Gregorian calendar
//! (Rata Die numbering: serial 1 = 0001-01-01, which is a Monday).
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1.
//! * The supported range is 1900-01-01 to 2199-12-31.
//! * Week arithmetic may step a few days past [`Date::MAX`] when the last
//!   week of the range reaches into January 2200; such dates stay
//!   well-formed for decomposition and display but cannot be constructed
//!   through the public constructors.

use chrono::Datelike;
use kw_core::errors::{Error, Result};

use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum supported date: January 1, 1900.
    pub const MIN: Date = Date(693_596);

    /// Maximum supported date: December 31, 2199.
    pub const MAX: Date = Date(803_168);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial falls outside the supported range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside supported range"
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO `YYYY-MM-DD` string (the wire format of date inputs).
    pub fn parse_iso(text: &str) -> Result<Self> {
        let mut parts = text.trim().splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => {
                return Err(Error::Parse(format!("expected YYYY-MM-DD, got {text:?}")));
            }
        };
        let year: u16 = y
            .parse()
            .map_err(|_| Error::Parse(format!("invalid year in {text:?}")))?;
        let month: u8 = m
            .parse()
            .map_err(|_| Error::Parse(format!("invalid month in {text:?}")))?;
        let day: u8 = d
            .parse()
            .map_err(|_| Error::Parse(format!("invalid day in {text:?}")))?;
        Self::from_ymd(year, month, day)
    }

    /// Create a date from an (unchecked) serial number.
    ///
    /// Week arithmetic is allowed to spill past `MAX`; only positivity is
    /// asserted here.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(serial > 0, "invalid date serial {serial}");
        Date(serial)
    }

    /// Shift by `n` days without a range check.
    ///
    /// This is the step for walking a week day by day: the week containing
    /// [`Date::MAX`] spills into January 2200, where
    /// [`add_days`](Self::add_days) would refuse to go.  Results stay
    /// well-formed for comparison, decomposition, and display; only
    /// positivity is asserted.
    pub fn offset(self, n: i32) -> Self {
        Self::from_serial_unchecked(self.0 + n)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = MONTH_OFFSET[m as usize - 1] + d as u16;
        if m > 2 && is_leap_year(y) {
            doy += 1;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday: serial 1 → Monday, 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result leaves the
    /// supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => Err(Error::Date(format!(
                "shifting {self} by {n} days leaves the supported range"
            ))),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first calendar day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last calendar day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        let last = days_in_month(y, m);
        Date(serial_from_ymd(y, m, last))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the last occurrence of `weekday` in the month containing this
    /// date.
    ///
    /// For example, the last Sunday of March 2025 is 2025-03-30.
    pub fn last_in_month(self, weekday: Weekday) -> Self {
        let eom = self.end_of_month();
        let back = (eom.weekday().ordinal() + 7 - weekday.ordinal()) % 7;
        eom.offset(-i32::from(back))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2025, 3)` is the
    /// third Wednesday of March 2025 (2025-03-19).
    ///
    /// # Errors
    /// Rejects `n` outside `1..=5` and an `n`-th occurrence the month does
    /// not reach.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 || n > 5 {
            return Err(Error::Date(format!("nth_weekday: n = {n} out of range [1, 5]")));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let skip =
            (i32::from(weekday.ordinal()) - i32::from(first.weekday().ordinal())).rem_euclid(7);
        let day = 1 + skip as u8 + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "no {n}th {weekday:?} in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(naive: chrono::NaiveDate) -> Result<Self> {
        let year = u16::try_from(naive.year()).map_err(|_| {
            Error::Date(format!("year {} out of range [1900, 2199]", naive.year()))
        })?;
        Self::from_ymd(year, naive.month() as u8, naive.day() as u8)
    }
}

impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        let (y, m, d) = ymd_from_serial(date.0);
        chrono::NaiveDate::from_ymd_opt(i32::from(y), u32::from(m), u32::from(d))
            .expect("every supported date maps to a chrono date")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a Rata Die serial number.
///
/// Serial 1 = 0001-01-01.
pub(crate) fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let prior = year as i32 - 1;
    // Days in complete years before `year`.
    let mut serial = 365 * prior + prior / 4 - prior / 100 + prior / 400;
    // Days in complete months of the current year.
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year, then adjust until serial falls within it.
    let mut y = (serial / 365 + 1) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
