//! Benchmark profiles for the lotsim parking simulation.
//!
//! - [`reference_profile`]: the 24-hour default run over a 20x50 mixed lot
//! - [`busy_profile`]: same lot at a saturating arrival rate
//! - [`near_full_lot`]: a lot with only its last cell free, for
//!   worst-case first-fit scans

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lotsim_core::{Car, CarType, SpotType, TickId};
use lotsim_engine::SimConfig;
use lotsim_lot::ParkingLot;

/// Rows in the reference lot.
pub const REFERENCE_ROWS: usize = 20;
/// Columns in the reference lot.
pub const REFERENCE_COLS: usize = 50;

/// A deterministic `rows x cols` lot cycling through every spot type.
///
/// Every tenth column is a non-parkable aisle.
pub fn mixed_lot(rows: usize, cols: usize) -> ParkingLot {
    let pattern = [
        SpotType::Large,
        SpotType::Regular,
        SpotType::Regular,
        SpotType::Small,
        SpotType::Economy,
    ];
    let grid = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    if c % 10 == 9 {
                        SpotType::NotParkable
                    } else {
                        pattern[(r + c) % pattern.len()]
                    }
                })
                .collect()
        })
        .collect();
    ParkingLot::from_rows(grid).expect("mixed lot is rectangular and non-empty")
}

/// The 24-hour reference run: [`mixed_lot`] at
/// [`REFERENCE_ROWS`]x[`REFERENCE_COLS`], 11 cars/hour.
pub fn reference_profile(seed: u64) -> (ParkingLot, SimConfig) {
    (
        mixed_lot(REFERENCE_ROWS, REFERENCE_COLS),
        SimConfig::new(11).with_seed(seed),
    )
}

/// The reference lot under one arrival per tick, which keeps the lot
/// full and the incoming queue growing.
pub fn busy_profile(seed: u64) -> (ParkingLot, SimConfig) {
    (
        mixed_lot(REFERENCE_ROWS, REFERENCE_COLS),
        SimConfig::new(3600).with_seed(seed),
    )
}

/// A `rows x cols` Large lot with every cell but the last occupied.
pub fn near_full_lot(rows: usize, cols: usize) -> ParkingLot {
    let mut lot = ParkingLot::from_rows(vec![vec![SpotType::Large; cols]; rows])
        .expect("uniform lot is rectangular and non-empty");
    for row in 0..rows {
        for col in 0..cols {
            if (row, col) != (rows - 1, cols - 1) {
                lot.park(row, col, Car::new(CarType::Large), TickId(0));
            }
        }
    }
    lot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_lot_has_aisles() {
        let (lot, config) = reference_profile(1);
        assert_eq!(lot.total_capacity(), REFERENCE_ROWS * (REFERENCE_COLS - 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn near_full_leaves_last_cell() {
        let mut lot = near_full_lot(4, 4);
        assert_eq!(lot.total_occupancy(), 15);
        let cell = lot.attempt_parking(Car::new(CarType::Economy), TickId(1));
        assert_eq!(cell.map(|c| (c.row, c.col)), Some((3, 3)));
    }
}
