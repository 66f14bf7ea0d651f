//! The immutable lot design matrix and its text loader.
//!
//! A design file has one row per line, cells separated by
//! [`DELIMITER`], each cell a single spot label (`E`, `S`, `R`, `L`,
//! `N`). Spaces are ignored, as are blank lines and empty tokens between
//! delimiters:
//!
//! ```text
//! L, L, R, R, N
//! R, S, S, E, N
//!
//! E, E, E, N, N
//! ```
//!
//! Every row must have the same number of cells. A ragged matrix is
//! rejected rather than padded or truncated.

use std::fmt;
use std::fs;
use std::path::Path;

use lotsim_core::{Cell, SpotType};

use crate::error::LotError;

/// Cell separator in lot-design text.
pub const DELIMITER: char = ',';

/// A validated rectangular matrix of spot types, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LotDesign {
    rows: usize,
    cols: usize,
    cells: Vec<SpotType>,
}

impl LotDesign {
    /// Build a design from an already-parsed matrix.
    ///
    /// # Errors
    ///
    /// - [`LotError::EmptyDesign`] if there are no rows or the first row
    ///   is empty.
    /// - [`LotError::RaggedRow`] if any row's length differs from the
    ///   first row's.
    pub fn from_rows(rows: Vec<Vec<SpotType>>) -> Result<Self, LotError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(LotError::EmptyDesign);
        }
        let n_rows = rows.len();
        let mut cells = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LotError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols,
            cells,
        })
    }

    /// Parse lot-design text (see the module docs for the format).
    ///
    /// # Errors
    ///
    /// [`LotError::UnknownLabel`] or [`LotError::MalformedCell`] for a bad
    /// cell, plus everything [`from_rows`](Self::from_rows) rejects.
    /// Row indices in errors count non-blank lines only.
    pub fn parse(text: &str) -> Result<Self, LotError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let row_idx = rows.len();
            let mut row = Vec::new();
            for token in line.split(DELIMITER) {
                let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
                if token.is_empty() {
                    continue;
                }
                let mut chars = token.chars();
                let (Some(label), None) = (chars.next(), chars.next()) else {
                    return Err(LotError::MalformedCell {
                        row: row_idx,
                        token,
                    });
                };
                let spot = SpotType::from_label(label).map_err(|e| LotError::UnknownLabel {
                    row: row_idx,
                    col: row.len(),
                    label: e.label,
                })?;
                row.push(spot);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(rows)
    }

    /// Read and parse a lot-design file.
    ///
    /// # Errors
    ///
    /// [`LotError::Io`] if the file cannot be read, otherwise as
    /// [`parse`](Self::parse).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LotError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count, parkable or not.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major index of `(row, col)`, or `None` if out of bounds.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Spot type at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<SpotType> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Number of parkable cells (everything except the marker type).
    pub fn capacity(&self) -> usize {
        self.cells.iter().filter(|s| s.is_parkable()).count()
    }

    /// All cells with their spot type, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, SpotType)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Cell::new(i / cols, i % cols), s))
    }
}

impl fmt::Display for LotDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for (j, spot) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "{DELIMITER} ")?;
                }
                write!(f, "{spot}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SpotType::*;

    #[test]
    fn parse_ignores_spaces_and_blank_lines() {
        let d = LotDesign::parse("L, N\n\n  E ,S  \n\n").unwrap();
        assert_eq!(d.rows(), 2);
        assert_eq!(d.cols(), 2);
        assert_eq!(d.get(0, 0), Some(Large));
        assert_eq!(d.get(0, 1), Some(NotParkable));
        assert_eq!(d.get(1, 0), Some(Economy));
        assert_eq!(d.get(1, 1), Some(Small));
    }

    #[test]
    fn parse_keeps_last_column() {
        let d = LotDesign::parse("R,R,L\n").unwrap();
        assert_eq!(d.cols(), 3);
        assert_eq!(d.get(0, 2), Some(Large));
    }

    #[test]
    fn trailing_delimiter_is_harmless() {
        let d = LotDesign::parse("R, S,\nE, E,").unwrap();
        assert_eq!(d.cols(), 2);
    }

    #[test]
    fn capacity_excludes_marker_only() {
        let d = LotDesign::parse("L,N\nE,S").unwrap();
        assert_eq!(d.capacity(), 3);
        assert_eq!(d.cell_count(), 4);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = LotDesign::parse("L,L,L\nR,R").unwrap_err();
        assert!(matches!(
            err,
            LotError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn ragged_matrix_rejected() {
        let err = LotDesign::from_rows(vec![vec![Large], vec![Large, Small]]).unwrap_err();
        assert!(matches!(err, LotError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(LotDesign::parse(""), Err(LotError::EmptyDesign)));
        assert!(matches!(
            LotDesign::parse("\n , \n"),
            Err(LotError::EmptyDesign)
        ));
        assert!(matches!(
            LotDesign::from_rows(vec![vec![]]),
            Err(LotError::EmptyDesign)
        ));
    }

    #[test]
    fn bad_labels_rejected() {
        assert!(matches!(
            LotDesign::parse("L,X"),
            Err(LotError::UnknownLabel {
                row: 0,
                col: 1,
                label: 'X'
            })
        ));
        assert!(matches!(
            LotDesign::parse("L,LR"),
            Err(LotError::MalformedCell { row: 0, .. })
        ));
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let d = LotDesign::parse("L").unwrap();
        assert_eq!(d.get(1, 0), None);
        assert_eq!(d.get(0, 1), None);
        assert_eq!(d.index(0, 0), Some(0));
    }

    #[test]
    fn cells_iterate_row_major() {
        let d = LotDesign::parse("E,S\nR,L").unwrap();
        let got: Vec<_> = d.cells().collect();
        assert_eq!(
            got,
            vec![
                (Cell::new(0, 0), Economy),
                (Cell::new(0, 1), Small),
                (Cell::new(1, 0), Regular),
                (Cell::new(1, 1), Large),
            ]
        );
    }

    #[test]
    fn display_matches_input_layout() {
        let d = LotDesign::parse("L,N\nE,S").unwrap();
        assert_eq!(d.to_string(), "L, N\nE, S\n");
    }
}
