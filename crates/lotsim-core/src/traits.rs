//! The randomness seam.
//!
//! The simulation loop never touches an RNG directly. Every Bernoulli
//! trial and every new car goes through a [`RandomSource`], so the
//! production engine can use a seeded generator while tests script exact
//! arrival and departure ticks.

use crate::car::Car;
use crate::id::{Cell, TickId};
use crate::rational::Rational;

/// What a Bernoulli trial is deciding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trial {
    /// Does a car arrive at the gate this tick?
    Arrival {
        /// Tick of the trial.
        tick: TickId,
    },
    /// Does the car parked at `cell` leave this tick?
    Departure {
        /// Tick of the trial.
        tick: TickId,
        /// Cell holding the car.
        cell: Cell,
        /// Ticks the car has been parked.
        duration: u64,
    },
}

impl Trial {
    /// Tick at which the trial runs.
    pub fn tick(&self) -> TickId {
        match *self {
            Self::Arrival { tick } | Self::Departure { tick, .. } => tick,
        }
    }
}

/// Source of trial outcomes and new cars.
pub trait RandomSource {
    /// Run one Bernoulli trial with success probability `probability`.
    ///
    /// Implementations backed by an RNG must return `false` for a zero
    /// probability and `true` for any probability of one or more.
    fn trial(&mut self, trial: Trial, probability: Rational) -> bool;

    /// Produce the car for an arrival at `tick`.
    fn next_car(&mut self, tick: TickId) -> Car;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn trial(&mut self, trial: Trial, probability: Rational) -> bool {
        (**self).trial(trial, probability)
    }

    fn next_car(&mut self, tick: TickId) -> Car {
        (**self).next_car(tick)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn trial(&mut self, trial: Trial, probability: Rational) -> bool {
        (**self).trial(trial, probability)
    }

    fn next_car(&mut self, tick: TickId) -> Car {
        (**self).next_car(tick)
    }
}
