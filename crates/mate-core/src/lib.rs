//! Core types for the mate finder.
//!
//! This crate provides the value types shared by the engine and its front ends:
//! - [`Cell`] for validated board coordinates
//! - [`Piece`], [`PieceKind`] and [`Side`] for piece identity
//! - [`Board`] for the 8x8 grid, plus its plain-text format
//! - [`Move`] for board-validated moves, with [`CastleSide`] and [`CellPair`]
//!   describing castling

mod board;
mod castle;
mod cell;
mod error;
mod mov;
mod piece;
mod side;
mod text;

pub use board::Board;
pub use castle::{CastleSide, CellPair};
pub use cell::Cell;
pub use error::ChessError;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use text::{parse_board, BoardTextError};
