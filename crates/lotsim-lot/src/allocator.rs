//! Spot allocation: the compatibility predicate and first-fit search.
//!
//! Both functions are pure over the design and occupancy grids. They are
//! free functions rather than `ParkingLot` methods so they can be tested
//! against hand-built grids without constructing a lot.

use lotsim_core::{CarType, Cell};

use crate::design::LotDesign;
use crate::occupancy::Occupancy;

/// Whether a car of type `car` may park at `(row, col)` right now.
///
/// Fails closed: returns `false` when the position is outside the grid,
/// when the design cell is the non-parkable marker, or when the cell is
/// already occupied. Otherwise applies
/// [`SpotType::accepts`](lotsim_core::SpotType::accepts).
pub fn can_park_at(
    design: &LotDesign,
    occupancy: &Occupancy,
    row: usize,
    col: usize,
    car: CarType,
) -> bool {
    let Some(spot) = design.get(row, col) else {
        return false;
    };
    if !spot.is_parkable() || occupancy.is_occupied(row, col) {
        return false;
    }
    spot.accepts(car)
}

/// First cell in row-major order where `car` may park.
///
/// Row 0 is scanned first, and within a row column 0 first. This is a
/// deterministic first-fit policy: it does not look for the tightest fit
/// or spread load across rows.
pub fn first_fit(design: &LotDesign, occupancy: &Occupancy, car: CarType) -> Option<Cell> {
    for row in 0..design.rows() {
        for col in 0..design.cols() {
            if can_park_at(design, occupancy, row, col, car) {
                return Some(Cell::new(row, col));
            }
        }
    }
    None
}
