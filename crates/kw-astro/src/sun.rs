//! Approximate sunrise and sunset for a fixed central-European location.
//!
//! A simplified solar-position formula tuned for the latitude band around
//! 48° N.  Day lengths come out within the stated ±10–15 minutes of civil
//! tables; the clock times inherit the coarse whole-hour zone handling of
//! [`crate::dst`] and are display estimates, not ephemeris values.

use std::f64::consts::PI;

use kw_time::date::Date;

use crate::dst::utc_offset_hours;

/// Latitude of the reference location, degrees north.
pub const LATITUDE_DEG: f64 = 48.2;

/// Longitude of the reference location, degrees east.
pub const LONGITUDE_DEG: f64 = 16.37;

/// Obliquity of the ecliptic used by the equation-of-time term, degrees.
const OBLIQUITY_DEG: f64 = 23.44;

/// Stated accuracy of the estimate, as shown next to the numbers.
pub const ACCURACY: &str = "±10-15 Min";

/// Sunrise/sunset in local decimal hours, before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarHours {
    /// Local sunrise in decimal hours.
    pub sunrise: f64,
    /// Local sunset in decimal hours.
    pub sunset: f64,
    /// Day length in decimal hours.
    pub day_length: f64,
}

/// Sunrise/sunset estimate formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunTimes {
    /// Local sunrise, `"HH:MM"` (minutes truncated).
    pub sunrise: String,
    /// Local sunset, `"HH:MM"`.
    pub sunset: String,
    /// Day length, `"Hh Mm"`.
    pub day_length: String,
    /// Accuracy statement for display.
    pub accuracy: &'static str,
}

/// Compute local sunrise/sunset in decimal hours for `date`.
pub fn solar_hours(date: Date) -> SolarHours {
    let n = f64::from(date.day_of_year());

    // Solar declination, peaking at the June solstice (day 173).
    let declination = (0.39795 * (0.98563 * (n - 173.0)).to_radians().cos()).asin();

    // Equation of time in minutes, folding in the offset of the location
    // from the zone meridian.
    let right_ascension = (0.98563 * (n - 81.0))
        .to_radians()
        .tan()
        .atan2(OBLIQUITY_DEG.to_radians().cos());
    let time_equation = 4.0 * (LONGITUDE_DEG.to_radians() - right_ascension);

    // Hour angle of sunrise/sunset.  The cosine leaves [-1, 1] only under
    // polar day or night, which this latitude never produces; the clamp
    // keeps acos total anyway.
    let cos_hour_angle = -LATITUDE_DEG.to_radians().tan() * declination.tan();
    let hour_angle = cos_hour_angle.clamp(-1.0, 1.0).acos();

    let half_day = hour_angle * 12.0 / PI;
    let zone = f64::from(utc_offset_hours(date));
    let sunrise = 12.0 - half_day - time_equation / 60.0 + zone;
    let sunset = 12.0 + half_day - time_equation / 60.0 + zone;

    SolarHours {
        sunrise,
        sunset,
        day_length: sunset - sunrise,
    }
}

/// Sunrise, sunset, and day length for `date`, formatted for display.
pub fn estimate(date: Date) -> SunTimes {
    let hours = solar_hours(date);
    SunTimes {
        sunrise: format_clock(hours.sunrise),
        sunset: format_clock(hours.sunset),
        day_length: format_duration(hours.day_length),
        accuracy: ACCURACY,
    }
}

/// `"HH:MM"`, truncating fractional minutes.
fn format_clock(hours: f64) -> String {
    let h = hours.floor();
    let m = ((hours - h) * 60.0).floor();
    format!("{:02}:{:02}", h as i64, m as i64)
}

/// `"Hh Mm"`, truncating fractional minutes.
fn format_duration(hours: f64) -> String {
    let h = hours.floor();
    let m = ((hours - h) * 60.0).floor();
    format!("{}h {}m", h as i64, m as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn solstice_day_lengths() {
        // Published Vienna day lengths: about 16h06m at the June solstice
        // and 8h20m at the December solstice.  The estimate must land
        // within its stated 15-minute band (0.25 h).
        let summer = solar_hours(date(2025, 6, 21));
        assert_abs_diff_eq!(summer.day_length, 16.10, epsilon = 0.25);

        let winter = solar_hours(date(2025, 12, 21));
        assert_abs_diff_eq!(winter.day_length, 8.34, epsilon = 0.25);

        assert!(summer.day_length > winter.day_length);
    }

    #[test]
    fn solstice_reference_values() {
        // Regression anchors for the exact formula output.
        let summer = solar_hours(date(2025, 6, 21));
        assert_abs_diff_eq!(summer.day_length, 15.869, epsilon = 0.02);
        let winter = solar_hours(date(2025, 12, 21));
        assert_abs_diff_eq!(winter.day_length, 8.131, epsilon = 0.02);
    }

    #[test]
    fn equinox_is_near_twelve_hours() {
        let spring = solar_hours(date(2025, 3, 20));
        assert_abs_diff_eq!(spring.day_length, 12.0, epsilon = 0.3);
        let autumn = solar_hours(date(2025, 9, 22));
        assert_abs_diff_eq!(autumn.day_length, 12.0, epsilon = 0.3);
    }

    #[test]
    fn sunrise_always_precedes_sunset() {
        let mut day = date(2025, 1, 1);
        let end = date(2025, 12, 31);
        while day <= end {
            let hours = solar_hours(day);
            assert!(
                hours.sunrise < hours.sunset,
                "sunrise {} >= sunset {} on {day}",
                hours.sunrise,
                hours.sunset
            );
            assert!(hours.day_length > 7.0 && hours.day_length < 17.0);
            day = day + 1;
        }
    }

    fn clock_to_hours(text: &str) -> f64 {
        let (h, m) = text.split_once(':').expect("HH:MM");
        h.parse::<f64>().unwrap() + m.parse::<f64>().unwrap() / 60.0
    }

    fn duration_to_hours(text: &str) -> f64 {
        let (h, m) = text.split_once(' ').expect("Hh Mm");
        let h: f64 = h.strip_suffix('h').unwrap().parse().unwrap();
        let m: f64 = m.strip_suffix('m').unwrap().parse().unwrap();
        h + m / 60.0
    }

    #[test]
    fn formatted_estimate_agrees_with_the_numbers() {
        // The display strings carry the formula's accuracy, so they are
        // checked against the numeric estimate (to the minute, truncation
        // included) rather than against clock-time literals.
        let two_minutes = 2.0 / 60.0;
        for day in [date(2025, 6, 21), date(2025, 12, 21)] {
            let hours = solar_hours(day);
            let formatted = estimate(day);
            assert_abs_diff_eq!(
                clock_to_hours(&formatted.sunrise),
                hours.sunrise,
                epsilon = two_minutes
            );
            assert_abs_diff_eq!(
                clock_to_hours(&formatted.sunset),
                hours.sunset,
                epsilon = two_minutes
            );
            assert_abs_diff_eq!(
                duration_to_hours(&formatted.day_length),
                hours.day_length,
                epsilon = two_minutes
            );
            assert_eq!(formatted.accuracy, "±10-15 Min");
        }
    }

    #[test]
    fn format_truncates_instead_of_rounding() {
        // 59.9 minutes must not round up into the next hour.
        assert_eq!(super::format_clock(7.999), "07:59");
        assert_eq!(super::format_duration(9.999), "9h 59m");
    }
}
