//! lotsim: discrete-event simulation of a parking lot with typed spots.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the lotsim sub-crates, and ships the `lotsim` command-line program.
//!
//! # Quick start
//!
//! ```rust
//! use lotsim::prelude::*;
//!
//! let design = LotDesign::parse("L, N\nE, S").unwrap();
//! let lot = ParkingLot::new(design);
//! assert_eq!(lot.total_capacity(), 3);
//!
//! let config = SimConfig::new(60).with_steps(3_600).with_seed(42);
//! let mut sim = Simulator::new(lot, config).unwrap();
//! let mut events: Vec<SimEvent> = Vec::new();
//! let metrics = sim.simulate(&mut events);
//! assert_eq!(metrics.ticks, 3_600);
//! assert_eq!(sim.state(), SimState::Finished);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lotsim-core` | Categories, cars, ticks, rationals, queues, the random-source seam |
//! | [`lot`] | `lotsim-lot` | Lot design and loader, occupancy, allocation |
//! | [`engine`] | `lotsim-engine` | Configuration, probability model, events, the tick loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`lotsim-core`).
///
/// [`types::CarType`], [`types::SpotType`], [`types::Rational`],
/// [`types::FifoQueue`] and the [`types::RandomSource`] trait.
pub use lotsim_core as types;

/// Lot design, occupancy and first-fit allocation (`lotsim-lot`).
pub use lotsim_lot as lot;

/// The simulation loop (`lotsim-engine`).
///
/// [`engine::Simulator`] runs ticks; [`engine::SeededSource`] is the
/// default random source.
pub use lotsim_engine as engine;

/// Common imports for typical lotsim usage.
pub mod prelude {
    // Core types and traits
    pub use lotsim_core::{Car, CarType, Cell, RandomSource, Rational, Spot, SpotType, TickId, Trial};

    // Lot
    pub use lotsim_lot::{LotDesign, LotError, ParkingLot};

    // Engine
    pub use lotsim_engine::{
        ConfigError, EventSink, NullSink, RunMetrics, SeededSource, SimConfig, SimEvent, SimState,
        Simulator, TickReport,
    };
}
