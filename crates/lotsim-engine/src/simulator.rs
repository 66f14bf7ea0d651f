//! The tick loop.
//!
//! [`Simulator`] owns the lot, the clock, both gate queues, and the
//! random source. [`step()`](Simulator::step) runs exactly one tick;
//! [`simulate()`](Simulator::simulate) rewinds the clock and runs
//! `config.steps` of them.
//!
//! # Ownership
//!
//! A [`Spot`] lives in exactly one place at a time: the incoming queue
//! while waiting at the gate, the occupancy grid while parked, and the
//! outgoing queue while its exit awaits reporting. Moving between them is
//! always a move, never a copy.

use std::fmt;

use log::{debug, info, trace};
use lotsim_core::{Cell, FifoQueue, RandomSource, Rational, Spot, TickId, Trial};
use lotsim_lot::ParkingLot;
use smallvec::SmallVec;

use crate::config::{ConfigError, SimConfig};
use crate::event::{EventSink, SimEvent};
use crate::metrics::{RunMetrics, TickReport};
use crate::probability::{SeededSource, TriangularDistribution};

/// Lifecycle of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    /// `clock < steps`: [`step()`](Simulator::step) will run a tick.
    Running,
    /// `clock == steps`: nothing left to run.
    Finished,
}

// ── Simulator ───────────────────────────────────────────────────

/// Discrete-event parking simulation over a [`ParkingLot`].
///
/// Generic over its [`RandomSource`]; the default [`SeededSource`] is
/// seeded from [`SimConfig::seed`].
pub struct Simulator<S: RandomSource = SeededSource> {
    lot: ParkingLot,
    config: SimConfig,
    source: S,
    arrival_probability: Rational,
    departure: TriangularDistribution,
    clock: TickId,
    incoming: FifoQueue<Spot>,
    outgoing: FifoQueue<Spot>,
    metrics: RunMetrics,
}

impl Simulator<SeededSource> {
    /// Create a simulator with a [`SeededSource`] seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(lot: ParkingLot, config: SimConfig) -> Result<Self, ConfigError> {
        let source = SeededSource::new(config.seed);
        Self::with_source(lot, config, source)
    }
}

impl<S: RandomSource> Simulator<S> {
    /// Create a simulator driven by an explicit random source.
    ///
    /// Validates `config` and precomputes the arrival probability and
    /// departure model. The clock starts at zero with both queues empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn with_source(lot: ParkingLot, config: SimConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let departure = config.departure_distribution()?;
        let arrival_probability = config.arrival_probability();
        Ok(Self {
            lot,
            config,
            source,
            arrival_probability,
            departure,
            clock: TickId(0),
            incoming: FifoQueue::new(),
            outgoing: FifoQueue::new(),
            metrics: RunMetrics::default(),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SimState {
        if self.clock.0 < self.config.steps {
            SimState::Running
        } else {
            SimState::Finished
        }
    }

    /// The next tick to run.
    pub fn clock(&self) -> TickId {
        self.clock
    }

    /// The lot.
    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Mutable access to the lot, for seeding a scenario before a run.
    pub fn lot_mut(&mut self) -> &mut ParkingLot {
        &mut self.lot
    }

    /// The validated configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The random source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Counters since the last [`simulate()`](Self::simulate) call or
    /// construction.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Cars waiting at the gate.
    pub fn incoming_len(&self) -> usize {
        self.incoming.len()
    }

    /// Exits not yet reported.
    pub fn outgoing_len(&self) -> usize {
        self.outgoing.len()
    }

    /// Empty the incoming queue and return how many cars it held.
    pub fn drain_incoming(&mut self) -> usize {
        self.incoming.drain_count()
    }

    /// Run one tick and advance the clock.
    ///
    /// Returns `None` without touching any state once the run is
    /// [`Finished`](SimState::Finished).
    pub fn step(&mut self, sink: &mut dyn EventSink) -> Option<TickReport> {
        if self.state() == SimState::Finished {
            return None;
        }
        let tick = self.clock;
        let mut report = TickReport {
            tick,
            arrival: None,
            departures: SmallVec::new(),
            entered: None,
            exited: None,
            occupancy: 0,
        };

        // 1. Arrival.
        if self
            .source
            .trial(Trial::Arrival { tick }, self.arrival_probability)
        {
            let car = self.source.next_car(tick);
            self.incoming.enqueue(Spot::new(car, tick));
            report.arrival = Some(car);
        }

        // 2. Departure scan, row-major.
        let forced = self.scan_departures(tick, &mut report.departures);

        // 3. Incoming head; blocks everything behind it on failure.
        let mut blocked = false;
        if let Some(car) = self.incoming.peek().map(Spot::car) {
            match self.lot.attempt_parking(car, tick) {
                Some(cell) => {
                    self.incoming.dequeue();
                    let occupancy = self.lot.total_occupancy();
                    let event = SimEvent::Entered {
                        car,
                        cell,
                        tick,
                        occupancy,
                    };
                    debug!("{event} at {cell}");
                    sink.emit(event);
                    report.entered = Some((car, cell));
                }
                None => blocked = true,
            }
        }

        // 4. At most one exit report.
        if let Some(spot) = self.outgoing.dequeue() {
            let car = spot.car();
            let event = SimEvent::Exited {
                car,
                tick,
                occupancy: self.lot.total_occupancy(),
            };
            debug!("{event}");
            sink.emit(event);
            report.exited = Some(car);
        }

        report.occupancy = self.lot.total_occupancy();
        self.metrics.record(
            &report,
            forced,
            blocked,
            self.incoming.len(),
            self.outgoing.len(),
        );

        // 5. Clock.
        self.clock = tick.next();
        Some(report)
    }

    /// Remove every car that leaves at `tick`, queueing its record for
    /// exit reporting. Returns the number of forced departures.
    fn scan_departures(&mut self, tick: TickId, vacated: &mut SmallVec<[Cell; 4]>) -> u64 {
        let max = self.config.max_parking_duration;
        let mut forced_count = 0;
        for row in 0..self.lot.rows() {
            for col in 0..self.lot.cols() {
                let Some(entry) = self.lot.spot_at(row, col).map(Spot::timestamp) else {
                    continue;
                };
                let cell = Cell::new(row, col);
                let duration = tick.since(entry);
                let forced = duration >= max;
                let leaves = forced
                    || self.source.trial(
                        Trial::Departure {
                            tick,
                            cell,
                            duration,
                        },
                        self.departure.pdf(duration),
                    );
                if !leaves {
                    continue;
                }
                if let Some(mut spot) = self.lot.remove(row, col) {
                    trace!(
                        "tick {tick}: {} leaves {cell} after {duration}s (forced: {forced})",
                        spot.car()
                    );
                    spot.set_timestamp(tick);
                    self.outgoing.enqueue(spot);
                    vacated.push(cell);
                    forced_count += u64::from(forced);
                }
            }
        }
        forced_count
    }

    /// Rewind the clock to zero and run every tick.
    ///
    /// Metrics are reset; the lot and both queues carry over from any
    /// previous run.
    pub fn simulate(&mut self, sink: &mut dyn EventSink) -> &RunMetrics {
        self.clock = TickId(0);
        self.metrics = RunMetrics::default();
        info!(
            "simulation start: {} ticks, {} cars/hour, max stay {}s, seed {}, capacity {}",
            self.config.steps,
            self.config.hourly_arrival_rate,
            self.config.max_parking_duration,
            self.config.seed,
            self.lot.total_capacity()
        );
        while self.step(sink).is_some() {}
        info!(
            "simulation end: {} arrivals, {} entries, {} departures ({} forced), \
             {} blocked ticks, peak occupancy {}, {} waiting at the gate",
            self.metrics.arrivals,
            self.metrics.entries,
            self.metrics.departures,
            self.metrics.forced_departures,
            self.metrics.blocked_ticks,
            self.metrics.peak_occupancy,
            self.incoming.len()
        );
        &self.metrics
    }
}

impl<S: RandomSource> fmt::Debug for Simulator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("clock", &self.clock)
            .field("steps", &self.config.steps)
            .field("occupancy", &self.lot.total_occupancy())
            .field("incoming", &self.incoming.len())
            .field("outgoing", &self.outgoing.len())
            .finish()
    }
}
