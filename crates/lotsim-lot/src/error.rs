//! Error types for lot construction and design loading.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors arising from building a lot design.
#[derive(Debug)]
pub enum LotError {
    /// The design has no rows, or its rows have no cells.
    EmptyDesign,
    /// A row's column count differs from the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// A cell label is not in the spot alphabet.
    UnknownLabel {
        /// Zero-based row of the cell.
        row: usize,
        /// Zero-based column of the cell.
        col: usize,
        /// The label that failed to parse.
        label: char,
    },
    /// A cell token is not a single character.
    MalformedCell {
        /// Zero-based row of the cell.
        row: usize,
        /// The token as it appeared after trimming.
        token: String,
    },
    /// The design file could not be read.
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for LotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDesign => write!(f, "lot design has no parkable grid"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} (design must be rectangular)"
            ),
            Self::UnknownLabel { row, col, label } => {
                write!(f, "unknown spot label '{label}' at ({row}, {col})")
            }
            Self::MalformedCell { row, token } => {
                write!(f, "cell '{token}' in row {row} is not a single label")
            }
            Self::Io { path, source } => {
                write!(f, "cannot read lot design {}: {source}", path.display())
            }
        }
    }
}

impl Error for LotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
