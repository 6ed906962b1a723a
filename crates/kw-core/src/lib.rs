//! # kw-core
//!
//! Core types, error definitions, and process-wide settings for
//! kalenderwoche-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error hierarchy, the holiday
//! jurisdiction selector, and the `Settings` singleton that lets callers pin
//! the reference "today".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!`/`fail!` macros.
pub mod errors;

/// Holiday jurisdiction (country) selector.
pub mod jurisdiction;

/// Process-wide settings (reference date override).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for fractional hours and progress ratios.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use jurisdiction::Jurisdiction;
pub use settings::{ScopedToday, Settings};
