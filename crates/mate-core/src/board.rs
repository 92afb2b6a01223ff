//! 8x8 board storage.
//!
//! The board only stores pieces. It knows nothing about how pieces move; all
//! chess semantics live in the engine, which derives new boards by cloning.

use crate::{Cell, ChessError, Piece, PieceKind, Side};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid of piece codes, indexed `[row][col]`.
///
/// Every cell always holds a valid code; "no piece" is code 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    grid: [[u8; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the standard opening setup.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for side in Side::BOTH {
            for (col, kind) in BACK_ROW.iter().enumerate() {
                board.grid[side.home_row() as usize][col] = Piece::new(side, *kind).code();
                board.grid[side.pawn_row() as usize][col] =
                    Piece::new(side, PieceKind::Pawn).code();
            }
        }
        board
    }

    /// Places `piece` on `cell`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, cell: Cell, piece: Piece) {
        self.grid[cell.row() as usize][cell.col() as usize] = piece.code();
    }

    /// Clears `cell` and returns what it held.
    ///
    /// With `fail_if_empty` set, an already-empty square is an error.
    pub fn remove(&mut self, cell: Cell, fail_if_empty: bool) -> Result<Piece, ChessError> {
        let piece = self.get(cell);
        if fail_if_empty && piece.is_none() {
            return Err(ChessError::EmptySquare(cell));
        }
        self.place(cell, Piece::NO_PIECE);
        Ok(piece)
    }

    /// Returns the piece on `cell`.
    #[inline]
    pub fn get(&self, cell: Cell) -> Piece {
        // place() is the only writer, so every stored code decodes.
        Piece::from_code(self.grid[cell.row() as usize][cell.col() as usize]).unwrap_or_default()
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.grid[cell.row() as usize][cell.col() as usize] != Piece::NO_PIECE.code()
    }

    #[inline]
    pub fn is_vacant(&self, cell: Cell) -> bool {
        !self.is_occupied(cell)
    }

    /// Iterates occupied cells with their pieces, row by row from A8.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all()
            .map(move |cell| (cell, self.get(cell)))
            .filter(|(_, piece)| !piece.is_none())
    }
}
