//! Core types and traits for the lotsim parking simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the lotsim workspace:
//! car and spot categories, occupancy records, tick and cell identifiers,
//! exact-rational probabilities, the FIFO queue, and the randomness seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod car;
pub mod error;
pub mod id;
pub mod kind;
pub mod queue;
pub mod rational;
pub mod traits;

pub use car::{Car, Spot};
pub use error::{LabelError, RationalError};
pub use id::{Cell, TickId};
pub use kind::{CarType, SpotType};
pub use queue::FifoQueue;
pub use rational::Rational;
pub use traits::{RandomSource, Trial};
