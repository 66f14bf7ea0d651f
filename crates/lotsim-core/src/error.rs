//! Error types for core value construction.
//!
//! The core types are total once built. Failures only arise at the
//! boundary where raw integers or text labels become typed values.

use std::error::Error;
use std::fmt;

/// Errors from constructing a [`Rational`](crate::Rational).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RationalError {
    /// The denominator was zero.
    ZeroDenominator {
        /// The numerator supplied alongside the zero denominator.
        numer: u64,
    },
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator { numer } => {
                write!(f, "rational {numer}/0 has a zero denominator")
            }
        }
    }
}

impl Error for RationalError {}

/// A character outside the lot-design label alphabet.
///
/// Returned by [`SpotType::from_label`](crate::SpotType::from_label).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelError {
    /// The offending label.
    pub label: char,
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown spot/car label '{}'", self.label)
    }
}

impl Error for LabelError {}
