//! Mutable occupancy storage, the same shape as the lot design.

use lotsim_core::{Cell, Spot};

/// Row-major grid of optional occupancy records.
///
/// Tracks the number of occupied cells alongside the grid so occupancy
/// queries are O(1). All reads are bounds-checked and return `None` out
/// of range; [`put`](Self::put) is the only operation that panics on a
/// bad index.
#[derive(Debug)]
pub struct Occupancy {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Spot>>,
    occupied: usize,
}

impl Occupancy {
    /// An empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, || None);
        Self {
            rows,
            cols,
            cells,
            occupied: 0,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Record at `(row, col)`; `None` if empty or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Spot> {
        self.index(row, col).and_then(|i| self.cells[i].as_ref())
    }

    /// Whether `(row, col)` holds a record. Out of range reads as empty.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Store `spot` at `(row, col)`, returning whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of range. Callers validate the
    /// position first.
    pub fn put(&mut self, row: usize, col: usize, spot: Spot) -> Option<Spot> {
        let i = match self.index(row, col) {
            Some(i) => i,
            None => panic!(
                "occupancy write at ({row}, {col}) outside {}x{} grid",
                self.rows, self.cols
            ),
        };
        let prev = self.cells[i].replace(spot);
        if prev.is_none() {
            self.occupied += 1;
        }
        prev
    }

    /// Clear `(row, col)` and return its record; `None` if empty or out of range.
    pub fn take(&mut self, row: usize, col: usize) -> Option<Spot> {
        let i = self.index(row, col)?;
        let prev = self.cells[i].take();
        if prev.is_some() {
            self.occupied -= 1;
        }
        prev
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.occupied
    }

    /// Occupied cells and their records in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Spot)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, s)| s.as_ref().map(|s| (Cell::new(i / cols, i % cols), s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotsim_core::{Car, CarType, TickId};

    fn spot(kind: CarType, t: u64) -> Spot {
        Spot::new(Car::new(kind), TickId(t))
    }

    #[test]
    fn put_take_tracks_count() {
        let mut occ = Occupancy::new(2, 3);
        assert_eq!(occ.count(), 0);
        assert!(occ.put(0, 2, spot(CarType::Small, 1)).is_none());
        assert!(occ.put(1, 0, spot(CarType::Large, 2)).is_none());
        assert_eq!(occ.count(), 2);

        // Overwrite keeps the count.
        let prev = occ.put(0, 2, spot(CarType::Economy, 3));
        assert_eq!(prev, Some(spot(CarType::Small, 1)));
        assert_eq!(occ.count(), 2);

        assert_eq!(occ.take(0, 2), Some(spot(CarType::Economy, 3)));
        assert_eq!(occ.take(0, 2), None);
        assert_eq!(occ.count(), 1);
    }

    #[test]
    fn out_of_range_reads_are_safe() {
        let mut occ = Occupancy::new(1, 1);
        assert_eq!(occ.get(5, 0), None);
        assert_eq!(occ.take(0, 9), None);
        assert!(!occ.is_occupied(3, 3));
    }

    #[test]
    #[should_panic(expected = "outside 1x1 grid")]
    fn out_of_range_write_panics() {
        let mut occ = Occupancy::new(1, 1);
        occ.put(1, 0, spot(CarType::Economy, 0));
    }

    #[test]
    fn iter_is_row_major() {
        let mut occ = Occupancy::new(2, 2);
        occ.put(1, 1, spot(CarType::Large, 0));
        occ.put(0, 1, spot(CarType::Small, 0));
        let cells: Vec<Cell> = occ.iter().map(|(c, _)| c).collect();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(1, 1)]);
        occ.take(1, 1);
        occ.take(0, 1);
        assert_eq!(occ.count(), 0);
        assert_eq!(occ.iter().count(), 0);
    }
}
