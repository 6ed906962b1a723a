//! Western zodiac signs by calendar date.

use kw_time::date::Date;

/// A zodiac sign with its German name and printable date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    /// German sign name.
    pub name: &'static str,
    /// Unicode symbol.
    pub symbol: &'static str,
    /// Human-readable German date range.
    pub date_range: &'static str,
}

/// The twelve signs, Widder first, in date-range order starting in March.
pub const SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        name: "Widder",
        symbol: "♈",
        date_range: "21. März - 20. April",
    },
    ZodiacSign {
        name: "Stier",
        symbol: "♉",
        date_range: "21. April - 20. Mai",
    },
    ZodiacSign {
        name: "Zwillinge",
        symbol: "♊",
        date_range: "21. Mai - 21. Juni",
    },
    ZodiacSign {
        name: "Krebs",
        symbol: "♋",
        date_range: "22. Juni - 22. Juli",
    },
    ZodiacSign {
        name: "Löwe",
        symbol: "♌",
        date_range: "23. Juli - 23. August",
    },
    ZodiacSign {
        name: "Jungfrau",
        symbol: "♍",
        date_range: "24. August - 23. September",
    },
    ZodiacSign {
        name: "Waage",
        symbol: "♎",
        date_range: "24. September - 23. Oktober",
    },
    ZodiacSign {
        name: "Skorpion",
        symbol: "♏",
        date_range: "24. Oktober - 22. November",
    },
    ZodiacSign {
        name: "Schütze",
        symbol: "♐",
        date_range: "23. November - 21. Dezember",
    },
    ZodiacSign {
        name: "Steinbock",
        symbol: "♑",
        date_range: "22. Dezember - 20. Januar",
    },
    ZodiacSign {
        name: "Wassermann",
        symbol: "♒",
        date_range: "21. Januar - 19. Februar",
    },
    ZodiacSign {
        name: "Fische",
        symbol: "♓",
        date_range: "20. Februar - 20. März",
    },
];

/// The sign containing `date`'s month and day.
///
/// Boundaries are inclusive on both ends exactly as printed in the sign's
/// `date_range`; the year never matters.
pub fn sign_for(date: Date) -> &'static ZodiacSign {
    let index = match (date.month(), date.day_of_month()) {
        (3, 21..) | (4, ..=20) => 0,  // Widder
        (4, _) | (5, ..=20) => 1,     // Stier
        (5, _) | (6, ..=21) => 2,     // Zwillinge
        (6, _) | (7, ..=22) => 3,     // Krebs
        (7, _) | (8, ..=23) => 4,     // Löwe
        (8, _) | (9, ..=23) => 5,     // Jungfrau
        (9, _) | (10, ..=23) => 6,    // Waage
        (10, _) | (11, ..=22) => 7,   // Skorpion
        (11, _) | (12, ..=21) => 8,   // Schütze
        (12, _) | (1, ..=20) => 9,    // Steinbock
        (1, _) | (2, ..=19) => 10,    // Wassermann
        _ => 11,                      // Fische
    };
    &SIGNS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn boundary_days() {
        let cases = [
            ((3, 20), "Fische"),
            ((3, 21), "Widder"),
            ((4, 20), "Widder"),
            ((4, 21), "Stier"),
            ((5, 20), "Stier"),
            ((5, 21), "Zwillinge"),
            ((6, 21), "Zwillinge"),
            ((6, 22), "Krebs"),
            ((7, 22), "Krebs"),
            ((7, 23), "Löwe"),
            ((8, 23), "Löwe"),
            ((8, 24), "Jungfrau"),
            ((9, 23), "Jungfrau"),
            ((9, 24), "Waage"),
            ((10, 23), "Waage"),
            ((10, 24), "Skorpion"),
            ((11, 22), "Skorpion"),
            ((11, 23), "Schütze"),
            ((12, 21), "Schütze"),
            ((12, 22), "Steinbock"),
            ((1, 20), "Steinbock"),
            ((1, 21), "Wassermann"),
            ((2, 19), "Wassermann"),
            ((2, 20), "Fische"),
        ];
        for ((m, d), name) in cases {
            assert_eq!(sign_for(date(1999, m, d)).name, name, "{m:02}-{d:02}");
        }
    }

    #[test]
    fn year_is_irrelevant() {
        assert_eq!(sign_for(date(1950, 8, 1)).name, "Löwe");
        assert_eq!(sign_for(date(2100, 8, 1)).name, "Löwe");
    }

    #[test]
    fn every_sign_is_reachable() {
        let mut seen = HashSet::new();
        let mut day = date(2025, 1, 1);
        let end = date(2025, 12, 31);
        while day <= end {
            seen.insert(sign_for(day).name);
            day = day + 1;
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn symbols_and_ranges_match_names() {
        let widder = sign_for(date(2025, 4, 1));
        assert_eq!(widder.symbol, "♈");
        assert_eq!(widder.date_range, "21. März - 20. April");
        let steinbock = sign_for(date(2025, 1, 1));
        assert_eq!(steinbock.name, "Steinbock");
        assert_eq!(steinbock.symbol, "♑");
    }
}
