//! Row/column coordinates on a row-major grid.

use std::fmt;

use crate::error::GridError;

/// A `(row, col)` position on a row-major grid.
///
/// The row is a `u128` so that every decodable binary state has a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCoord {
    /// Zero-based row.
    pub row: u128,
    /// Zero-based column.
    pub col: usize,
}

impl GridCoord {
    /// Creates a coordinate from a row and column.
    pub fn new(row: u128, col: usize) -> Self {
        Self { row, col }
    }

    /// Lays out a linear index row-major on a grid `columns` wide.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidColumns`] if `columns` is zero.
    pub fn from_index(index: u128, columns: usize) -> Result<Self, GridError> {
        if columns == 0 {
            return Err(GridError::InvalidColumns { columns });
        }
        let width = columns as u128;
        Ok(Self {
            row: index / width,
            // remainder is below `columns`, so it fits
            col: (index % width) as usize,
        })
    }

    /// Returns the row-major linear index on a grid `columns` wide, or `None`
    /// if it does not fit in a `u128`.
    pub fn index(self, columns: usize) -> Option<u128> {
        self.row
            .checked_mul(columns as u128)?
            .checked_add(self.col as u128)
    }

    /// Returns the coordinate as a `(row, col)` tuple.
    pub fn into_tuple(self) -> (u128, usize) {
        (self.row, self.col)
    }
}

impl From<(u128, usize)> for GridCoord {
    fn from((row, col): (u128, usize)) -> Self {
        Self { row, col }
    }
}

impl From<GridCoord> for (u128, usize) {
    fn from(coord: GridCoord) -> Self {
        coord.into_tuple()
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
