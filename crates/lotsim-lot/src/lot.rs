//! The parking lot: design plus occupancy.

use std::fmt;

use lotsim_core::{Car, Cell, Spot, SpotType, TickId};

use crate::allocator;
use crate::design::LotDesign;
use crate::error::LotError;
use crate::occupancy::Occupancy;

/// A parking lot: an immutable [`LotDesign`] and its [`Occupancy`].
#[derive(Debug)]
pub struct ParkingLot {
    design: LotDesign,
    occupancy: Occupancy,
}

impl ParkingLot {
    /// An empty lot with the given design.
    pub fn new(design: LotDesign) -> Self {
        let occupancy = Occupancy::new(design.rows(), design.cols());
        Self { design, occupancy }
    }

    /// An empty lot from an already-parsed matrix.
    ///
    /// # Errors
    ///
    /// Rejects empty and non-rectangular matrices; see
    /// [`LotDesign::from_rows`].
    pub fn from_rows(rows: Vec<Vec<SpotType>>) -> Result<Self, LotError> {
        LotDesign::from_rows(rows).map(Self::new)
    }

    /// The lot design.
    pub fn design(&self) -> &LotDesign {
        &self.design
    }

    /// The occupancy grid.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.design.rows()
    }

    /// Number of spots per row.
    pub fn cols(&self) -> usize {
        self.design.cols()
    }

    /// Park `car` at `(row, col)` stamped with `timestamp`.
    ///
    /// Performs no validation: an occupied cell is silently overwritten,
    /// and nothing stops a car landing on an incompatible or
    /// non-parkable cell. Callers must check [`can_park_at`](Self::can_park_at)
    /// first; [`attempt_parking`](Self::attempt_parking) does.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid. Staying in range is
    /// the caller's obligation.
    pub fn park(&mut self, row: usize, col: usize, car: Car, timestamp: TickId) {
        self.occupancy.put(row, col, Spot::new(car, timestamp));
    }

    /// Clear `(row, col)` and return its record.
    ///
    /// Returns `None` if the cell was empty or the position is out of
    /// range.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<Spot> {
        self.occupancy.take(row, col)
    }

    /// The record at `(row, col)`; `None` if empty or out of range.
    pub fn spot_at(&self, row: usize, col: usize) -> Option<&Spot> {
        self.occupancy.get(row, col)
    }

    /// Whether `car` may park at `(row, col)` right now.
    pub fn can_park_at(&self, row: usize, col: usize, car: Car) -> bool {
        allocator::can_park_at(&self.design, &self.occupancy, row, col, car.kind())
    }

    /// Park `car` at the first compatible free cell in row-major order.
    ///
    /// Returns the chosen cell, or `None` with no state change if no
    /// cell qualifies.
    pub fn attempt_parking(&mut self, car: Car, timestamp: TickId) -> Option<Cell> {
        let cell = allocator::first_fit(&self.design, &self.occupancy, car.kind())?;
        self.park(cell.row, cell.col, car, timestamp);
        Some(cell)
    }

    /// Number of parkable cells.
    pub fn total_capacity(&self) -> usize {
        self.design.capacity()
    }

    /// Number of occupied cells.
    pub fn total_occupancy(&self) -> usize {
        self.occupancy.count()
    }
}

impl fmt::Display for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Lot Design ====")?;
        write!(f, "{}", self.design)?;
        writeln!(f)?;
        writeln!(f, "==== Parking Occupancy ====")?;
        for (cell, _) in self.design.cells() {
            match self.spot_at(cell.row, cell.col) {
                Some(spot) => writeln!(f, "{cell}: {spot}")?,
                None => writeln!(f, "{cell}: Unoccupied")?,
            }
        }
        Ok(())
    }
}
