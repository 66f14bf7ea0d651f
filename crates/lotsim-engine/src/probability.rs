//! Probability model: triangular departure hazard and Bernoulli trials.
//!
//! All probabilities are [`Rational`]s. A trial draws a uniform integer
//! in `[0, denom)` and succeeds when it is below `numer`, so the success
//! rate is exactly `numer / denom` with no float conversion.
//!
//! [`SeededSource`] is the production [`RandomSource`]: a ChaCha8 stream
//! seeded once per run, giving identical event sequences for identical
//! seeds.

use lotsim_core::{Car, CarType, RandomSource, Rational, TickId, Trial};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ConfigError;

/// Run one Bernoulli trial with exact-rational success probability.
///
/// A zero probability never succeeds and a probability of one or more
/// always succeeds; neither case consumes randomness.
pub fn event_occurred<R: Rng + ?Sized>(rng: &mut R, probability: Rational) -> bool {
    if probability.is_zero() {
        return false;
    }
    if probability.is_certain() {
        return true;
    }
    rng.gen_range(0..probability.denom()) < probability.numer()
}

// ── TriangularDistribution ─────────────────────────────────────────

/// Triangular density over `[min, max]` with peak at `mode`.
///
/// The simulator evaluates [`pdf`](Self::pdf) at a car's elapsed dwell
/// time and uses the value directly as that tick's departure probability:
/// a per-tick hazard, not a cumulative distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangularDistribution {
    min: u64,
    mode: u64,
    max: u64,
}

impl TriangularDistribution {
    /// Create a distribution over `[min, max]` peaking at `mode`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDistribution`] unless
    /// `min <= mode <= max`, `min < max`, and `max - min` fits in `u32`.
    pub fn new(min: u64, mode: u64, max: u64) -> Result<Self, ConfigError> {
        if min >= max {
            return Err(ConfigError::InvalidDistribution {
                reason: format!("min ({min}) must be below max ({max})"),
            });
        }
        if mode < min || mode > max {
            return Err(ConfigError::InvalidDistribution {
                reason: format!("mode ({mode}) outside [{min}, {max}]"),
            });
        }
        if u32::try_from(max - min).is_err() {
            return Err(ConfigError::InvalidDistribution {
                reason: format!("width {} exceeds u32::MAX", max - min),
            });
        }
        Ok(Self { min, mode, max })
    }

    /// Lower bound.
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Peak.
    pub fn mode(&self) -> u64 {
        self.mode
    }

    /// Upper bound.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Density at `x`, exact.
    ///
    /// ```text
    ///          2(x - a)                       2(b - x)
    /// f(x) = ------------  for a <= x < c,  ------------  for c < x <= b
    ///        (b - a)(c - a)                  (b - a)(b - c)
    /// ```
    ///
    /// with `f(c) = 2 / (b - a)` and zero outside `[a, b]`. The width
    /// bound checked in [`new`](Self::new) keeps every product in `u64`.
    pub fn pdf(&self, x: u64) -> Rational {
        let (a, c, b) = (self.min, self.mode, self.max);
        let width = b - a;
        let (numer, denom) = if x < a || x > b {
            return Rational::ZERO;
        } else if x < c {
            (2 * (x - a), width * (c - a))
        } else if x == c {
            (2, width)
        } else {
            (2 * (b - x), width * (b - c))
        };
        Rational::new(numer, denom).expect("new() enforces min < max; each branch has positive factors")
    }
}

// ── SeededSource ───────────────────────────────────────────────────

/// Deterministic [`RandomSource`] backed by [`ChaCha8Rng`].
///
/// Trials go through [`event_occurred`]; new cars are drawn uniformly
/// from the four [`CarType`]s.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// A source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn trial(&mut self, _trial: Trial, probability: Rational) -> bool {
        event_occurred(&mut self.rng, probability)
    }

    fn next_car(&mut self, _tick: TickId) -> Car {
        let idx = self.rng.gen_range(0..CarType::ALL.len());
        Car::new(CarType::ALL[idx])
    }
}
