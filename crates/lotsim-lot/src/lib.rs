//! Parking lot grid and spot allocation for lotsim.
//!
//! A lot is two same-shaped row-major matrices: an immutable
//! [`LotDesign`] of [`SpotType`](lotsim_core::SpotType) cells, and a
//! mutable [`Occupancy`] grid of optional [`Spot`](lotsim_core::Spot)
//! records. [`ParkingLot`] owns both and places cars through the
//! first-fit [`allocator`].
//!
//! # Invariant
//!
//! An occupancy cell is non-empty only if the design cell at the same
//! position is parkable. [`ParkingLot::attempt_parking`] upholds this by
//! construction; [`ParkingLot::park`] trusts its caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod design;
pub mod error;
pub mod lot;
pub mod occupancy;

pub use allocator::{can_park_at, first_fit};
pub use design::{LotDesign, DELIMITER};
pub use error::LotError;
pub use lot::ParkingLot;
pub use occupancy::Occupancy;
