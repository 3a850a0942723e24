//! Error type for the I/O boundary and problem construction.
//!
//! Construction and verification never fail: degenerate inputs are handled
//! by the algorithms and infeasibility is reported as
//! [`Violation`](crate::models::Violation)s. Only malformed data is an error.

use std::fmt;

/// Errors raised while building or loading problems and solutions.
#[derive(Debug)]
pub enum RoutingError {
    /// A record could not be interpreted.
    Malformed {
        /// 1-based line number of the offending record.
        line: u64,
        /// What was wrong with it.
        reason: String,
    },
    /// Two customers share an identifier.
    DuplicateCustomerId(usize),
    /// Underlying CSV failure.
    Csv(csv::Error),
    /// Underlying I/O failure.
    Io(std::io::Error),
}

impl RoutingError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { line, reason } => write!(f, "malformed input at line {line}: {reason}"),
            Self::DuplicateCustomerId(id) => write!(f, "duplicate customer id {id}"),
            Self::Csv(err) => write!(f, "csv error: {err}"),
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for RoutingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for RoutingError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<std::io::Error> for RoutingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
