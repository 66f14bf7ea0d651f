//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] carries every tunable the loop reads. Nothing is a
//! process-wide constant, so tests can shrink the parking limit or the
//! run length independently. [`validate()`](SimConfig::validate) runs
//! before the first tick; an invalid config never starts a partial run.

use std::error::Error;
use std::fmt;

use lotsim_core::Rational;

use crate::probability::TriangularDistribution;

/// Seconds in one hour; the arrival rate is expressed per hour.
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Default upper bound on how long a car stays parked: 8 hours.
pub const MAX_PARKING_DURATION: u64 = 8 * SECONDS_PER_HOUR;

/// Default run length: 24 simulated hours at one tick per second.
pub const SIMULATION_DURATION: u64 = 24 * SECONDS_PER_HOUR;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The hourly arrival rate is zero.
    InvalidArrivalRate {
        /// The rejected value.
        value: u64,
    },
    /// The maximum parking duration is zero.
    InvalidParkingDuration {
        /// The rejected value.
        value: u64,
    },
    /// The maximum parking duration exceeds `u32::MAX` seconds, which
    /// would overflow exact departure-probability arithmetic.
    ParkingDurationTooLarge {
        /// The rejected value.
        value: u64,
    },
    /// Triangular distribution parameters violate `min <= mode <= max`
    /// or `min < max`.
    InvalidDistribution {
        /// Description of the violated constraint.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArrivalRate { value } => {
                write!(f, "hourly arrival rate must be a positive integer, got {value}")
            }
            Self::InvalidParkingDuration { value } => {
                write!(f, "max parking duration must be at least 1 second, got {value}")
            }
            Self::ParkingDurationTooLarge { value } => {
                write!(
                    f,
                    "max parking duration {value} exceeds {} seconds",
                    u32::MAX
                )
            }
            Self::InvalidDistribution { reason } => {
                write!(f, "invalid triangular distribution: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Mean number of cars arriving per simulated hour. Must be >= 1.
    pub hourly_arrival_rate: u64,
    /// Number of ticks to run. Default: [`SIMULATION_DURATION`].
    pub steps: u64,
    /// Dwell time at which departure is forced. Default:
    /// [`MAX_PARKING_DURATION`].
    pub max_parking_duration: u64,
    /// Seed for [`SeededSource`](crate::SeededSource). Default: 0.
    pub seed: u64,
}

impl SimConfig {
    /// A config with the given hourly arrival rate and default everything else.
    pub fn new(hourly_arrival_rate: u64) -> Self {
        Self {
            hourly_arrival_rate,
            steps: SIMULATION_DURATION,
            max_parking_duration: MAX_PARKING_DURATION,
            seed: 0,
        }
    }

    /// Set the number of ticks to run.
    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Set the forced-departure dwell time.
    pub fn with_max_parking_duration(mut self, seconds: u64) -> Self {
        self.max_parking_duration = seconds;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hourly_arrival_rate == 0 {
            return Err(ConfigError::InvalidArrivalRate {
                value: self.hourly_arrival_rate,
            });
        }
        if self.max_parking_duration == 0 {
            return Err(ConfigError::InvalidParkingDuration {
                value: self.max_parking_duration,
            });
        }
        if u32::try_from(self.max_parking_duration).is_err() {
            return Err(ConfigError::ParkingDurationTooLarge {
                value: self.max_parking_duration,
            });
        }
        Ok(())
    }

    /// Per-tick arrival probability, `hourly_arrival_rate / 3600`.
    ///
    /// Rates of 3600 or more yield a probability of at least one, so a
    /// car arrives every tick.
    pub fn arrival_probability(&self) -> Rational {
        Rational::new(self.hourly_arrival_rate, SECONDS_PER_HOUR)
            .expect("SECONDS_PER_HOUR is non-zero")
    }

    /// Triangular departure model over `[0, max]` peaking at `max / 2`.
    ///
    /// # Errors
    ///
    /// Fails only if the config does not [`validate`](Self::validate).
    pub fn departure_distribution(&self) -> Result<TriangularDistribution, ConfigError> {
        self.validate()?;
        TriangularDistribution::new(0, self.max_parking_duration / 2, self.max_parking_duration)
    }
}
