//! Error types for mathfin.
//!
//! Every failure the pricer can report is a variant of one
//! `thiserror`-derived enum.  Validation of inputs goes through the
//! [`ensure!`](crate::ensure) macro, which returns
//! [`Error::InvalidConfiguration`].

use thiserror::Error;

/// The top-level error type used throughout mathfin.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Grid, model, option or surface parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The explicit scheme's time step violates `0 < k <= h²/2`.
    #[error("unstable configuration: time step {k} outside (0, {limit}] (h²/2)")]
    UnstableConfiguration {
        /// Time increment implied by the option maturity and the grid.
        k: f64,
        /// Upper bound `h²/2` implied by the price increment.
        limit: f64,
    },

    /// A tridiagonal system could not be factorized.
    #[error("singular matrix: elimination broke down at row {row}")]
    SingularMatrix {
        /// Row at which elimination broke down.
        row: usize,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// A coordinate lies outside the domain of the grid.
    #[error("{axis} = {value} outside grid domain [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending coordinate (`"t"` or `"S"`).
        axis: &'static str,
        /// The requested coordinate.
        value: f64,
        /// Lower edge of the domain.
        min: f64,
        /// Upper edge of the domain.
        max: f64,
    },
}

/// Shorthand `Result` type used throughout mathfin.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidConfiguration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mf_core::{ensure, errors::Error};
/// fn positive(x: f64) -> mf_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidConfiguration(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidConfiguration(
                format!($($msg)*)
            ));
        }
    };
}
