//! Observable simulation events and the sinks that receive them.
//!
//! The loop emits at most one [`SimEvent::Entered`] and at most one
//! [`SimEvent::Exited`] per tick, in that order. Occupancy is sampled
//! after the tick's mutations, so an exit reported on a later tick than
//! its departure shows the occupancy at report time.

use std::fmt;

use lotsim_core::{Car, Cell, TickId};

/// A car entering or leaving, as observed at the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// The head of the incoming queue parked.
    Entered {
        /// The car that parked.
        car: Car,
        /// Where it parked.
        cell: Cell,
        /// Tick of entry.
        tick: TickId,
        /// Occupied cells after parking.
        occupancy: usize,
    },
    /// The head of the outgoing queue was reported.
    Exited {
        /// The car that left.
        car: Car,
        /// Tick of the report, not of the departure.
        tick: TickId,
        /// Occupied cells at report time.
        occupancy: usize,
    },
}

impl SimEvent {
    /// Tick at which the event was emitted.
    pub fn tick(&self) -> TickId {
        match *self {
            Self::Entered { tick, .. } | Self::Exited { tick, .. } => tick,
        }
    }

    /// The car involved.
    pub fn car(&self) -> Car {
        match *self {
            Self::Entered { car, .. } | Self::Exited { car, .. } => car,
        }
    }

    /// Occupancy carried by the event.
    pub fn occupancy(&self) -> usize {
        match *self {
            Self::Entered { occupancy, .. } | Self::Exited { occupancy, .. } => occupancy,
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entered {
                car,
                tick,
                occupancy,
                ..
            } => write!(f, "{car} ENTERED at timestep {tick}; occupancy is at {occupancy}"),
            Self::Exited {
                car,
                tick,
                occupancy,
            } => write!(f, "{car} EXITED at timestep {tick}; occupancy is at {occupancy}"),
        }
    }
}

// ── Sinks ──────────────────────────────────────────────────────────

/// Receiver for events as the loop produces them.
pub trait EventSink {
    /// Accept one event. Called in emission order.
    fn emit(&mut self, event: SimEvent);
}

impl EventSink for Vec<SimEvent> {
    fn emit(&mut self, event: SimEvent) {
        self.push(event);
    }
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: SimEvent) {}
}
