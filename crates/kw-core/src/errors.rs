//! Error types for kalenderwoche-rs.
//!
//! All fallible operations in the workspace report through a single
//! `thiserror`-derived enum.  The calculators themselves are total over valid
//! dates; errors arise at the edges – date construction, text parsing, and
//! injected holiday tables.

use thiserror::Error;

/// The top-level error type used throughout kalenderwoche-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout kalenderwoche-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use kw_core::ensure;
/// fn positive(x: f64) -> kw_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use kw_core::fail;
/// fn unsupported() -> kw_core::errors::Result<()> {
///     fail!("not supported here");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
