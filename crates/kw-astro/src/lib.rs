//! # kw-astro
//!
//! Approximate sunrise/sunset times, the simplified daylight-saving rule,
//! and zodiac signs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Simplified central-European daylight-saving rule.
pub mod dst;

/// Approximate sunrise/sunset estimates.
pub mod sun;

/// Zodiac signs by calendar date.
pub mod zodiac;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use dst::is_daylight_saving;
pub use sun::{estimate, SolarHours, SunTimes};
pub use zodiac::{sign_for, ZodiacSign};
