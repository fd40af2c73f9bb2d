//! Error types for bizcal.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report.  Holiday-fetch failures have no variant: the loader logs them and
//! keeps the previous holiday list.  The `ensure!` macro is an early-return
//! shorthand for precondition checks.

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date component or date arithmetic result is out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Input text did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bizcal_core::ensure;
/// fn positive(days: i64) -> bizcal_core::errors::Result<i64> {
///     ensure!(days > 0, "days must be positive, got {days}");
///     Ok(days)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(days: i64) -> Result<i64> {
        crate::ensure!(days >= 0, "negative day count {days}");
        Ok(days)
    }

    #[test]
    fn ensure_reports_precondition() {
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(-2),
            Err(Error::Precondition("negative day count -2".into()))
        );
    }

    #[test]
    fn display_prefixes() {
        assert_eq!(Error::Parse("bad".into()).to_string(), "parse error: bad");
        assert_eq!(Error::Date("x".into()).to_string(), "date error: x");
    }
}
