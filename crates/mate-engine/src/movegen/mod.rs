//! Move generation, check detection and move application.
//!
//! Every function here is pure: boards are taken by reference and any change
//! is made to a fresh clone.
//!
//! Self-check filtering is controlled by an explicit `filter_self_check` flag.
//! Deciding whether a move exposes the mover's king means generating the
//! opponent's replies; those replies are generated unfiltered, since a reply
//! that takes the king settles the question and needs no further validation.

pub mod direction;
mod pieces;

use crate::MovesSummary;
use direction::Direction;
use mate_core::{Board, Cell, ChessError, Move, Piece, PieceKind, Side};

pub use pieces::is_en_passant_capture;

/// Generates every move for `side`.
///
/// With `filter_self_check`, moves that leave `side`'s king capturable are dropped.
pub fn generate_moves(
    board: &Board,
    side: Side,
    previous: Option<&Move>,
    filter_self_check: bool,
) -> Result<MovesSummary, ChessError> {
    let mut summary = MovesSummary::new(side);
    for (origin, piece) in board.pieces() {
        if piece.side() != Some(side) {
            continue;
        }
        summary.add_moves(moves_for_piece(board, origin, piece, previous, filter_self_check)?);
    }
    Ok(summary)
}

/// Generates the moves of the single `piece` standing on `origin`.
pub fn moves_for_piece(
    board: &Board,
    origin: Cell,
    piece: Piece,
    previous: Option<&Move>,
    filter_self_check: bool,
) -> Result<Vec<Move>, ChessError> {
    let Piece::Colored(side, kind) = piece else {
        return Ok(Vec::new());
    };

    let moves = match kind {
        PieceKind::Pawn => pieces::pawn_moves(board, origin, piece, side, previous)?,
        PieceKind::Knight => pieces::knight_moves(board, origin, piece, side)?,
        PieceKind::Bishop => pieces::sliding_moves(board, origin, piece, side, &Direction::DIAGONAL, 8)?,
        PieceKind::Rook => pieces::sliding_moves(board, origin, piece, side, &Direction::ORTHOGONAL, 8)?,
        PieceKind::Queen => pieces::sliding_moves(board, origin, piece, side, &Direction::ALL, 8)?,
        PieceKind::King => {
            let mut moves = pieces::sliding_moves(board, origin, piece, side, &Direction::ALL, 1)?;
            // No castling out of check; the check test is skipped when unfiltered
            if !filter_self_check || !is_in_check(board, side, previous)? {
                moves.extend(pieces::castling_moves(board, origin, piece, side)?);
            }
            moves
        }
    };

    if filter_self_check {
        filter_self_checks(board, side, moves)
    } else {
        Ok(moves)
    }
}

/// Drops moves that leave `side`'s king capturable, keeping any move that
/// itself takes the opposing king.
fn filter_self_checks(board: &Board, side: Side, moves: Vec<Move>) -> Result<Vec<Move>, ChessError> {
    let mut legal = Vec::with_capacity(moves.len());
    for mv in moves {
        if captures_opposing_king(&mv, side) || !leaves_in_check(board, &mv, side)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

fn captures_opposing_king(mv: &Move, side: Side) -> bool {
    mv.captured()
        .is_some_and(|piece| piece.is(side.opposite(), PieceKind::King))
}

/// Returns true if `side` is in check once `mv` has been played.
pub fn leaves_in_check(board: &Board, mv: &Move, side: Side) -> Result<bool, ChessError> {
    is_in_check(&apply_move(board, mv)?, side, Some(mv))
}

/// Returns true if `mv` is among the legal moves of its piece.
pub fn is_legal_move(board: &Board, mv: &Move, previous: Option<&Move>) -> Result<bool, ChessError> {
    Ok(moves_for_piece(board, mv.source(), mv.piece(), previous, true)?.contains(mv))
}

/// Like [`is_legal_move`], but fails with [`ChessError::IllegalMove`] instead of returning false.
pub fn validate_move(board: &Board, mv: &Move, previous: Option<&Move>) -> Result<(), ChessError> {
    if is_legal_move(board, mv, previous)? {
        Ok(())
    } else {
        Err(ChessError::IllegalMove(format!("{} is not a legal move here", mv)))
    }
}

/// Returns true if any unfiltered opposing move would capture `side`'s king.
pub fn is_in_check(board: &Board, side: Side, previous: Option<&Move>) -> Result<bool, ChessError> {
    Ok(generate_moves(board, side.opposite(), previous, false)?.captures_king())
}

/// In check with no legal move.
pub fn is_checkmate(board: &Board, side: Side, previous: Option<&Move>) -> Result<bool, ChessError> {
    Ok(is_in_check(board, side, previous)? && generate_moves(board, side, previous, true)?.is_empty())
}

/// Not in check, yet with no legal move.
pub fn is_stalemate(board: &Board, side: Side, previous: Option<&Move>) -> Result<bool, ChessError> {
    Ok(!is_in_check(board, side, previous)? && generate_moves(board, side, previous, true)?.is_empty())
}

/// Returns the first king of `side` found scanning from A8, if any.
pub fn locate_king(board: &Board, side: Side) -> Option<Cell> {
    locate_kings(board, side).into_iter().next()
}

/// Returns every cell holding a king of `side`. Setups may have none or several.
pub fn locate_kings(board: &Board, side: Side) -> Vec<Cell> {
    board
        .pieces()
        .filter(|(_, piece)| piece.is(side, PieceKind::King))
        .map(|(cell, _)| cell)
        .collect()
}

/// Plays `mv`, returning the new board.
///
/// The source is cleared, the target receives the piece (or its promotion),
/// the rook is relocated when castling and the passed pawn is removed for en
/// passant.
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, ChessError> {
    let mut next = board.clone();

    next.remove(mv.source(), true)?;
    next.place(mv.target(), mv.landing_piece());

    if let Some(travel) = mv.rook_travel() {
        let rook = Piece::new(mv.piece().require_side()?, PieceKind::Rook);
        next.place(travel.to, rook);
        next.remove(travel.from, true)?;
    }

    if let Some(cell) = mv.en_passant_cell() {
        next.remove(cell, true)?;
    }

    Ok(next)
}

/// Takes back `mv`, the exact inverse of [`apply_move`].
pub fn undo_move(board: &Board, mv: &Move) -> Result<Board, ChessError> {
    let mut prev = board.clone();

    prev.remove(mv.target(), true)?;
    prev.place(mv.source(), mv.piece());

    if let Some(captured) = mv.captured() {
        let cell = mv.en_passant_cell().unwrap_or(mv.target());
        prev.place(cell, captured);
    }

    if let Some(travel) = mv.rook_travel() {
        let rook = Piece::new(mv.piece().require_side()?, PieceKind::Rook);
        prev.place(travel.from, rook);
        prev.remove(travel.to, true)?;
    }

    Ok(prev)
}
