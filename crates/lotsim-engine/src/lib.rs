//! Discrete-event simulation loop for lotsim parking lots.
//!
//! Provides [`Simulator`], which advances a logical clock one tick (one
//! simulated second) at a time over a [`ParkingLot`](lotsim_lot::ParkingLot).
//! Each tick runs, in this fixed order:
//!
//! 1. an arrival trial that may enqueue a new car at the gate,
//! 2. a row-major departure scan over every parked car,
//! 3. at most one parking attempt for the head of the incoming queue,
//! 4. at most one exit report from the outgoing queue,
//! 5. the clock advance.
//!
//! Randomness enters only through [`RandomSource`](lotsim_core::RandomSource);
//! [`SeededSource`] is the deterministic ChaCha-backed implementation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod event;
pub mod metrics;
pub mod probability;
pub mod simulator;

pub use config::{
    ConfigError, SimConfig, MAX_PARKING_DURATION, SECONDS_PER_HOUR, SIMULATION_DURATION,
};
pub use event::{EventSink, NullSink, SimEvent};
pub use metrics::{RunMetrics, TickReport};
pub use probability::{event_occurred, SeededSource, TriangularDistribution};
pub use simulator::{SimState, Simulator};
