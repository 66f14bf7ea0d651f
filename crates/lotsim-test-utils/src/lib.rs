//! Test utilities for lotsim development.
//!
//! [`ScriptedSource`] is a [`RandomSource`] whose trial outcomes are
//! fixed up front, so scenarios can force an arrival or a departure at an
//! exact tick. The lot helpers build [`ParkingLot`]s from inline text.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::{BTreeMap, BTreeSet};

use lotsim_core::{Car, CarType, Cell, RandomSource, Rational, TickId, Trial};
use lotsim_lot::{LotDesign, ParkingLot};

/// The 5x10 reference lot: 37 parkable cells, one blank line, one
/// all-marker row, and a marker in column 4 of each of the first four
/// rows.
pub const REFERENCE_LOT: &str = "\
L, L, L, L, N, R, R, R, R, R
R, R, S, S, N, S, S, S, E, E

E, E, E, E, N, R, R, R, R, R
N, N, N, N, N, N, N, N, N, N
L, L, R, R, R, R, S, S, E, E
";

/// Parse `text` into an empty lot. Panics on a malformed design.
pub fn lot(text: &str) -> ParkingLot {
    match LotDesign::parse(text) {
        Ok(design) => ParkingLot::new(design),
        Err(e) => panic!("bad test lot {text:?}: {e}"),
    }
}

/// [`REFERENCE_LOT`], empty.
pub fn reference_lot() -> ParkingLot {
    lot(REFERENCE_LOT)
}

/// `rows x cols` lot of one spot type.
pub fn uniform_lot(rows: usize, cols: usize, label: char) -> ParkingLot {
    let row = vec![label.to_string(); cols].join(",");
    let text = vec![row; rows].join("\n");
    lot(&text)
}

// ── ScriptedSource ─────────────────────────────────────────────────

/// A [`RandomSource`] that answers from a script and ignores probabilities.
///
/// Arrival trials succeed only at ticks registered with
/// [`arrive`](Self::arrive); departure trials succeed only for
/// `(tick, cell)` pairs registered with [`depart`](Self::depart). Every
/// trial is recorded for later inspection.
#[derive(Debug)]
pub struct ScriptedSource {
    arrivals: BTreeMap<u64, CarType>,
    departures: BTreeSet<(u64, Cell)>,
    default_car: CarType,
    trials: Vec<Trial>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            arrivals: BTreeMap::new(),
            departures: BTreeSet::new(),
            default_car: CarType::Economy,
            trials: Vec::new(),
        }
    }

    /// Make a car of `kind` arrive at `tick`.
    pub fn arrive(mut self, tick: u64, kind: CarType) -> Self {
        self.arrivals.insert(tick, kind);
        self
    }

    /// Make the car at `(row, col)` leave at `tick`, if one is parked there.
    pub fn depart(mut self, tick: u64, row: usize, col: usize) -> Self {
        self.departures.insert((tick, Cell::new(row, col)));
        self
    }

    /// Every trial received, in call order.
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Departure trials received at `tick`, in call order.
    pub fn departure_trials_at(&self, tick: u64) -> Vec<Cell> {
        self.trials
            .iter()
            .filter_map(|t| match *t {
                Trial::Departure { tick: t, cell, .. } if t.0 == tick => Some(cell),
                _ => None,
            })
            .collect()
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ScriptedSource {
    fn trial(&mut self, trial: Trial, _probability: Rational) -> bool {
        self.trials.push(trial);
        match trial {
            Trial::Arrival { tick } => self.arrivals.contains_key(&tick.0),
            Trial::Departure { tick, cell, .. } => self.departures.contains(&(tick.0, cell)),
        }
    }

    fn next_car(&mut self, tick: TickId) -> Car {
        Car::new(
            self.arrivals
                .get(&tick.0)
                .copied()
                .unwrap_or(self.default_car),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotsim_core::SpotType;

    #[test]
    fn reference_lot_shape() {
        let l = reference_lot();
        assert_eq!((l.rows(), l.cols()), (5, 10));
        assert_eq!(l.total_capacity(), 37);
        for row in 0..4 {
            assert_eq!(l.design().get(row, 4), Some(SpotType::NotParkable));
        }
        assert_eq!(l.design().get(4, 4), Some(SpotType::Regular));
        assert!((0..10).all(|col| l.design().get(3, col) == Some(SpotType::NotParkable)));
    }

    #[test]
    fn uniform_lot_capacity() {
        assert_eq!(uniform_lot(3, 4, 'R').total_capacity(), 12);
        assert_eq!(uniform_lot(2, 2, 'N').total_capacity(), 0);
    }

    #[test]
    fn script_answers_and_records() {
        let mut s = ScriptedSource::new()
            .arrive(2, CarType::Large)
            .depart(4, 0, 1);
        let p = Rational::ONE;
        assert!(!s.trial(Trial::Arrival { tick: TickId(1) }, p));
        assert!(s.trial(Trial::Arrival { tick: TickId(2) }, Rational::ZERO));
        assert_eq!(s.next_car(TickId(2)).kind(), CarType::Large);
        assert_eq!(s.next_car(TickId(3)).kind(), CarType::Economy);
        let leave = Trial::Departure {
            tick: TickId(4),
            cell: Cell::new(0, 1),
            duration: 2,
        };
        let stay = Trial::Departure {
            tick: TickId(4),
            cell: Cell::new(0, 0),
            duration: 2,
        };
        assert!(s.trial(leave, p));
        assert!(!s.trial(stay, p));
        assert_eq!(s.trials().len(), 4);
        assert_eq!(
            s.departure_trials_at(4),
            vec![Cell::new(0, 1), Cell::new(0, 0)]
        );
    }
}
