//! Error types for the skewt-thermo crate.

use std::{error::Error, fmt};

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThermoError {
    /// An input lies outside the mathematical domain of a formula, such as a
    /// non-positive argument to a logarithm or a pressure at or below the
    /// saturation vapor pressure. The payload names the violated constraint.
    ///
    /// These are raised at the point of violation and never converted to a NaN
    /// or an infinity, since a silent non-finite value would mask a unit
    /// mix-up in the caller.
    DomainError(&'static str),
    /// Parallel array arguments had different lengths, so element-wise
    /// evaluation is impossible.
    ShapeError {
        /// Length of the first array argument.
        expected: usize,
        /// Length of the offending array argument.
        found: usize,
    },
    /// A sounding text file could not be parsed.
    ParseError {
        /// One-based line number where parsing failed.
        line: usize,
    },
}

impl fmt::Display for ThermoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThermoError::DomainError(constraint) => {
                write!(f, "input outside the domain of the formula: {}", constraint)
            }
            ThermoError::ShapeError { expected, found } => write!(
                f,
                "mismatched array lengths for element-wise evaluation: {} vs {}",
                expected, found
            ),
            ThermoError::ParseError { line } => {
                write!(f, "invalid sounding text at line {}", line)
            }
        }
    }
}

impl Error for ThermoError {}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, ThermoError>;
