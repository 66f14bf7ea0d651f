//! Exact non-negative fractions for probability arithmetic.
//!
//! Arrival and departure probabilities are compared against uniform draws
//! tens of thousands of times per run. Keeping them as integer fractions
//! means the comparison `draw < numer` over `[0, denom)` is exact, with
//! no floating-point rounding anywhere on the trial path.

use std::cmp::Ordering;
use std::fmt;

use crate::error::RationalError;

/// A non-negative fraction `numer / denom` with `denom > 0`.
///
/// Equality and ordering compare values, not representations:
/// `1/2 == 2/4`. Values above one are allowed and mean "certain" when
/// used as a probability.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    numer: u64,
    denom: u64,
}

impl Rational {
    /// Zero (`0/1`).
    pub const ZERO: Rational = Rational { numer: 0, denom: 1 };
    /// One (`1/1`).
    pub const ONE: Rational = Rational { numer: 1, denom: 1 };

    /// Create `numer / denom`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denom == 0`.
    pub fn new(numer: u64, denom: u64) -> Result<Self, RationalError> {
        if denom == 0 {
            return Err(RationalError::ZeroDenominator { numer });
        }
        Ok(Self { numer, denom })
    }

    /// Numerator as supplied (not reduced).
    pub fn numer(&self) -> u64 {
        self.numer
    }

    /// Denominator as supplied (not reduced, always positive).
    pub fn denom(&self) -> u64 {
        self.denom
    }

    /// Whether the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Whether the value is at least one.
    pub fn is_certain(&self) -> bool {
        self.numer >= self.denom
    }

    /// The same value in lowest terms.
    pub fn reduced(&self) -> Self {
        let g = gcd(self.numer, self.denom);
        Self {
            numer: self.numer / g,
            denom: self.denom / g,
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    // gcd(0, d) = d and d > 0, so the result is never zero.
    a
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiply in u128: both products fit without overflow.
        let lhs = self.numer as u128 * other.denom as u128;
        let rhs = other.numer as u128 * self.denom as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
