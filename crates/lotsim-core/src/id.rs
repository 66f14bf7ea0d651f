//! Strongly-typed identifiers: the simulation clock and grid cells.

use std::fmt;

/// Monotonically increasing tick counter.
///
/// One tick is one simulated second. Occupancy records carry a `TickId`
/// as their timestamp: the entry time while parked, the exit time once
/// the record sits in the outgoing queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Ticks elapsed between `earlier` and `self`.
    ///
    /// Saturates at zero when `earlier` lies in the future, which can only
    /// happen for records placed by hand before a clock reset.
    pub fn since(self, earlier: TickId) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A `(row, col)` position in the lot grid.
///
/// Ordering is row-major, matching the allocator's scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (0 = first row of the design file).
    pub row: usize,
    /// Column index within the row.
    pub col: usize,
}

impl Cell {
    /// Create a cell position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_saturates() {
        assert_eq!(TickId(10).since(TickId(4)), 6);
        assert_eq!(TickId(4).since(TickId(10)), 0);
        assert_eq!(TickId(7).next(), TickId(8));
    }

    #[test]
    fn cells_order_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(0, 0)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
        assert_eq!(Cell::new(2, 3).to_string(), "(2, 3)");
    }
}
