//! Error type for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart computation.
///
/// `Validation` is raised at the input-parsing boundary (malformed or
/// missing civil date/time fields); `Computation` is raised when a
/// non-finite or out-of-domain number would reach a trigonometric or
/// modulo operation. The core never retries and never partially
/// completes: a function either returns a full result or fails atomically.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed or missing civil input, with a hint for the caller.
    Validation {
        message: String,
        hint: &'static str,
    },
    /// Non-finite or out-of-domain numeric input.
    Computation(String),
}

impl ChartError {
    pub(crate) fn non_finite(what: &str, value: f64) -> Self {
        Self::Computation(format!("{what} is not finite: {value}"))
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message, hint } => write!(f, "{message} ({hint})"),
            Self::Computation(msg) => write!(f, "computation error: {msg}"),
        }
    }
}

impl Error for ChartError {}
