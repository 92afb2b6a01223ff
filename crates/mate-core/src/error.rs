//! Error taxonomy for board and move construction.

use crate::Cell;
use thiserror::Error;

/// Errors raised at the point a board or move invariant is violated.
///
/// None of these are recovered internally; callers decide how to surface them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid row ({row}) or col ({col})")]
    OutOfBounds { row: i32, col: i32 },

    #[error("square {0} is already empty")]
    EmptySquare(Cell),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("side must be light or dark, got '{0}'")]
    InvalidSide(String),
}
