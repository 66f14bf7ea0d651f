//! Per-tick reports and run-level counters.
//!
//! [`TickReport`] describes what a single [`step`](crate::Simulator::step)
//! did. [`RunMetrics`] accumulates across a run and is reset by
//! [`simulate`](crate::Simulator::simulate).

use lotsim_core::{Car, Cell, TickId};
use smallvec::SmallVec;

/// Everything that happened during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that ran.
    pub tick: TickId,
    /// Car that arrived at the gate, if any.
    pub arrival: Option<Car>,
    /// Cells vacated by the departure scan, row-major.
    pub departures: SmallVec<[Cell; 4]>,
    /// Car that parked, with its cell.
    pub entered: Option<(Car, Cell)>,
    /// Car whose exit was reported.
    pub exited: Option<Car>,
    /// Occupied cells at the end of the tick.
    pub occupancy: usize,
}

/// Counters accumulated over a run.
///
/// `blocked_ticks` counts ticks on which a car waited at the head of the
/// incoming queue and could not park; cars behind it wait too.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Ticks executed.
    pub ticks: u64,
    /// Cars that arrived at the gate.
    pub arrivals: u64,
    /// Cars that parked.
    pub entries: u64,
    /// Cars removed from the lot, probabilistic and forced.
    pub departures: u64,
    /// Departures forced by the parking-duration limit.
    pub forced_departures: u64,
    /// Exits reported from the outgoing queue.
    pub exits_reported: u64,
    /// Ticks on which the incoming head could not park.
    pub blocked_ticks: u64,
    /// Highest occupancy seen at the end of any tick.
    pub peak_occupancy: usize,
    /// Longest the incoming queue got.
    pub peak_incoming_len: usize,
    /// Longest the outgoing queue got.
    pub peak_outgoing_len: usize,
}

impl RunMetrics {
    /// Fold one tick's report and queue lengths into the totals.
    pub fn record(
        &mut self,
        report: &TickReport,
        forced: u64,
        blocked: bool,
        incoming_len: usize,
        outgoing_len: usize,
    ) {
        self.ticks += 1;
        self.arrivals += u64::from(report.arrival.is_some());
        self.entries += u64::from(report.entered.is_some());
        self.departures += report.departures.len() as u64;
        self.forced_departures += forced;
        self.exits_reported += u64::from(report.exited.is_some());
        self.blocked_ticks += u64::from(blocked);
        self.peak_occupancy = self.peak_occupancy.max(report.occupancy);
        self.peak_incoming_len = self.peak_incoming_len.max(incoming_len);
        self.peak_outgoing_len = self.peak_outgoing_len.max(outgoing_len);
    }
}
