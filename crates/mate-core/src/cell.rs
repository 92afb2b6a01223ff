//! Board coordinate representation.

use crate::ChessError;
use std::fmt;

/// A validated square on the 8x8 grid.
///
/// Rows run top to bottom and columns left to right, so row 0 is rank 8 and
/// column 0 is file A:
/// - (0, 0) = A8, (0, 7) = H8
/// - (7, 0) = A1, (7, 7) = H1
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell, failing if either coordinate is outside 0-7.
    pub fn new(row: i32, col: i32) -> Result<Self, ChessError> {
        if Self::is_out_of_bounds(row, col) {
            return Err(ChessError::OutOfBounds { row, col });
        }
        Ok(Cell {
            row: row as u8,
            col: col as u8,
        })
    }

    const fn at(row: u8, col: u8) -> Self {
        Cell { row, col }
    }

    /// Returns true if (row, col) does not name a square on the board.
    #[inline]
    pub const fn is_out_of_bounds(row: i32, col: i32) -> bool {
        row < 0 || row > 7 || col < 0 || col > 7
    }

    /// Parses a label such as "E4" (either case).
    pub fn from_label(label: &str) -> Option<Self> {
        let bytes = label.trim().as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].to_ascii_uppercase().checked_sub(b'A')?;
        let rank = bytes[1].checked_sub(b'1')?;
        if col > 7 || rank > 7 {
            return None;
        }
        Some(Cell::at(7 - rank, col))
    }

    /// Iterates all 64 cells row by row, starting at A8.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..64u8).map(|i| Cell::at(i / 8, i % 8))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the cell `(d_row, d_col)` away, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i32 + d_row as i32;
        let col = self.col as i32 + d_col as i32;
        Cell::new(row, col).ok()
    }

    /// Algebraic label: column letter A-H followed by rank 8 minus row.
    pub fn label(self) -> String {
        format!("{}{}", (b'A' + self.col) as char, 8 - self.row)
    }

    pub const A1: Cell = Cell::at(7, 0);
    pub const C1: Cell = Cell::at(7, 2);
    pub const D1: Cell = Cell::at(7, 3);
    pub const E1: Cell = Cell::at(7, 4);
    pub const F1: Cell = Cell::at(7, 5);
    pub const G1: Cell = Cell::at(7, 6);
    pub const H1: Cell = Cell::at(7, 7);
    pub const A8: Cell = Cell::at(0, 0);
    pub const C8: Cell = Cell::at(0, 2);
    pub const D8: Cell = Cell::at(0, 3);
    pub const E8: Cell = Cell::at(0, 4);
    pub const F8: Cell = Cell::at(0, 5);
    pub const G8: Cell = Cell::at(0, 6);
    pub const H8: Cell = Cell::at(0, 7);
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({} ({}, {}))", self.label(), self.row, self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
