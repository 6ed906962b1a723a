//! Calendar periods (month, quarter, half-year, year) containing a date.

use kw_time::date::Date;
use kw_time::month::Month;

/// The four reporting periods shown by the progress card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    /// The calendar month.
    Month,
    /// The calendar quarter.
    Quarter,
    /// January–June or July–December.
    HalfYear,
    /// The calendar year.
    Year,
}

/// All period kinds in display order.
pub const PERIOD_KINDS: [PeriodKind; 4] = [
    PeriodKind::Month,
    PeriodKind::Quarter,
    PeriodKind::HalfYear,
    PeriodKind::Year,
];

/// 1-based quarter (1–4) containing `date`.
pub fn quarter_of(date: Date) -> u8 {
    (date.month() - 1) / 3 + 1
}

impl PeriodKind {
    /// German display label for the period containing `date`:
    /// `"Mai"`, `"2. Quartal"`, `"1. Halbjahr"`, `"Jahresfortschritt"`.
    pub fn label(self, date: Date) -> String {
        match self {
            PeriodKind::Month => Month::from_number(date.month())
                .expect("month always in 1..=12")
                .name_de()
                .to_string(),
            PeriodKind::Quarter => format!("{}. Quartal", quarter_of(date)),
            PeriodKind::HalfYear => {
                if date.month() <= 6 {
                    "1. Halbjahr".to_string()
                } else {
                    "2. Halbjahr".to_string()
                }
            }
            PeriodKind::Year => "Jahresfortschritt".to_string(),
        }
    }

    /// German word for the period's end, used by the countdown line.
    pub(crate) fn end_word(self) -> &'static str {
        match self {
            PeriodKind::Month => "Monatsende",
            PeriodKind::Quarter => "Quartalsende",
            PeriodKind::HalfYear => "Halbjahresende",
            PeriodKind::Year => "Jahresende",
        }
    }
}

/// First-to-last calendar day of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    start: Date,
    end: Date,
}

impl PeriodSpan {
    /// The period of `kind` containing `date`.
    pub fn of(kind: PeriodKind, date: Date) -> Self {
        let year = date.year();
        let ymd = |m: u8, d: u8| {
            Date::from_ymd(year, m, d).expect("period bounds derived from a valid date")
        };
        match kind {
            PeriodKind::Month => PeriodSpan {
                start: date.start_of_month(),
                end: date.end_of_month(),
            },
            PeriodKind::Quarter => {
                let first_month = (quarter_of(date) - 1) * 3 + 1;
                PeriodSpan {
                    start: ymd(first_month, 1),
                    end: ymd(first_month + 2, 1).end_of_month(),
                }
            }
            PeriodKind::HalfYear => {
                if date.month() <= 6 {
                    PeriodSpan {
                        start: ymd(1, 1),
                        end: ymd(6, 30),
                    }
                } else {
                    PeriodSpan {
                        start: ymd(7, 1),
                        end: ymd(12, 31),
                    }
                }
            }
            PeriodKind::Year => PeriodSpan {
                start: ymd(1, 1),
                end: ymd(12, 31),
            },
        }
    }

    /// First calendar day of the period.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last calendar day of the period.
    pub fn end(&self) -> Date {
        self.end
    }
}
