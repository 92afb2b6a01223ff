//! Position status and setup validation.

use crate::movegen::{generate_moves, is_in_check, locate_kings};
use mate_core::{Board, ChessError, Move, Side};
use std::fmt;
use thiserror::Error;

/// Where a side stands in a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not in check and has at least one legal move.
    Normal,
    /// In check, with a way out.
    Check,
    /// In check with no legal move.
    Checkmate,
    /// Not in check, yet with no legal move.
    Stalemate,
}

impl Status {
    /// Returns true if the side cannot move at all.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Normal => "normal",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Returns the status of `side`, computing check and legal moves once each.
pub fn status(board: &Board, side: Side, previous: Option<&Move>) -> Result<Status, ChessError> {
    let in_check = is_in_check(board, side, previous)?;
    let can_move = !generate_moves(board, side, previous, true)?.is_empty();
    Ok(match (in_check, can_move) {
        (true, true) => Status::Check,
        (true, false) => Status::Checkmate,
        (false, true) => Status::Normal,
        (false, false) => Status::Stalemate,
    })
}

/// Reasons a setup cannot be solved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("{0} has no king")]
    MissingKing(Side),

    #[error("{0} has {1} kings")]
    TooManyKings(Side, usize),

    #[error("{0} is already checkmated")]
    AlreadyCheckmated(Side),

    #[error(transparent)]
    Chess(#[from] ChessError),
}

/// Checks that each side has exactly one king and neither is already mated.
pub fn check_playable(board: &Board) -> Result<(), SetupError> {
    for side in Side::BOTH {
        match locate_kings(board, side).len() {
            0 => return Err(SetupError::MissingKing(side)),
            1 => {}
            n => return Err(SetupError::TooManyKings(side, n)),
        }
    }
    for side in Side::BOTH {
        if status(board, side, None)? == Status::Checkmate {
            return Err(SetupError::AlreadyCheckmated(side));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mate_core::{Cell, Piece};

    fn board_with(pieces: &[(&str, Piece)]) -> Board {
        let mut board = Board::empty();
        for (label, piece) in pieces {
            board.place(Cell::from_label(label).unwrap(), *piece);
        }
        board
    }

    #[test]
    fn opening_is_normal() {
        let board = Board::standard();
        assert_eq!(status(&board, Side::Light, None).unwrap(), Status::Normal);
        assert_eq!(status(&board, Side::Dark, None).unwrap(), Status::Normal);
        assert!(check_playable(&board).is_ok());
    }

    #[test]
    fn each_status() {
        let check = board_with(&[("E1", Piece::LIGHT_KING), ("E8", Piece::DARK_ROOK)]);
        assert_eq!(status(&check, Side::Light, None).unwrap(), Status::Check);

        let mate = board_with(&[
            ("G8", Piece::DARK_KING),
            ("A8", Piece::LIGHT_ROOK),
            ("B7", Piece::LIGHT_ROOK),
            ("G1", Piece::LIGHT_KING),
        ]);
        assert_eq!(status(&mate, Side::Dark, None).unwrap(), Status::Checkmate);
        assert!(Status::Checkmate.is_terminal());

        let stale = board_with(&[
            ("A8", Piece::DARK_KING),
            ("B6", Piece::LIGHT_QUEEN),
            ("C1", Piece::LIGHT_KING),
        ]);
        assert_eq!(status(&stale, Side::Dark, None).unwrap(), Status::Stalemate);
        assert_eq!(Status::Stalemate.to_string(), "stalemate");
    }

    #[test]
    fn setup_needs_one_king_each() {
        let board = board_with(&[("E1", Piece::LIGHT_KING)]);
        assert_eq!(check_playable(&board), Err(SetupError::MissingKing(Side::Dark)));

        let board = board_with(&[
            ("E1", Piece::LIGHT_KING),
            ("A1", Piece::LIGHT_KING),
            ("E8", Piece::DARK_KING),
        ]);
        assert_eq!(
            check_playable(&board),
            Err(SetupError::TooManyKings(Side::Light, 2))
        );
    }

    #[test]
    fn setup_rejects_finished_game() {
        let board = board_with(&[
            ("G8", Piece::DARK_KING),
            ("A8", Piece::LIGHT_ROOK),
            ("B7", Piece::LIGHT_ROOK),
            ("G1", Piece::LIGHT_KING),
        ]);
        assert_eq!(
            check_playable(&board),
            Err(SetupError::AlreadyCheckmated(Side::Dark))
        );
        assert_eq!(
            SetupError::AlreadyCheckmated(Side::Dark).to_string(),
            "Dark is already checkmated"
        );
    }
}
