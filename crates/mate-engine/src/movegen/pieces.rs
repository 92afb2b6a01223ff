//! Pseudo-legal move patterns for each piece kind.
//!
//! Nothing here checks whether a move exposes the mover's king; that is
//! layered on top by the caller.

use super::direction::Direction;
use mate_core::{Board, CastleSide, Cell, ChessError, Move, Piece, PieceKind, Side};

/// Knight jumps as (row, col) increments.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

/// Walks outward along each direction, at most `limit` squares.
///
/// A square is reachable if it is empty or holds an opposing piece; an
/// opposing piece ends the walk after being included, a friendly one before.
pub(super) fn sliding_moves(
    board: &Board,
    origin: Cell,
    piece: Piece,
    side: Side,
    directions: &[Direction],
    limit: u8,
) -> Result<Vec<Move>, ChessError> {
    let mut moves = Vec::new();

    for direction in directions {
        let (d_row, d_col) = direction.delta();
        let mut cell = origin;
        for _ in 0..limit {
            cell = match cell.offset(d_row, d_col) {
                Some(next) => next,
                None => break,
            };
            let occupant = board.get(cell);
            if occupant.side() == Some(side) {
                break;
            }
            moves.push(Move::new(board, piece, origin, cell)?);
            if !occupant.is_none() {
                break;
            }
        }
    }

    Ok(moves)
}

pub(super) fn knight_moves(board: &Board, origin: Cell, knight: Piece, side: Side) -> Result<Vec<Move>, ChessError> {
    let mut moves = Vec::new();
    for (d_row, d_col) in KNIGHT_JUMPS {
        let Some(target) = origin.offset(d_row, d_col) else {
            continue;
        };
        if board.get(target).side() == Some(side) {
            continue;
        }
        moves.push(Move::new(board, knight, origin, target)?);
    }
    Ok(moves)
}

pub(super) fn pawn_moves(
    board: &Board,
    origin: Cell,
    pawn: Piece,
    side: Side,
    previous: Option<&Move>,
) -> Result<Vec<Move>, ChessError> {
    let mut moves = Vec::new();
    let dir = side.pawn_direction();

    // Single and double step
    if let Some(one) = origin.offset(dir, 0).filter(|cell| board.is_vacant(*cell)) {
        push_with_promotions(board, pawn, side, origin, one, &mut moves)?;

        if origin.row() == side.pawn_row() {
            if let Some(two) = origin.offset(2 * dir, 0).filter(|cell| board.is_vacant(*cell)) {
                moves.push(Move::new(board, pawn, origin, two)?);
            }
        }
    }

    // Diagonal captures, including en passant
    for d_col in [-1, 1] {
        let Some(target) = origin.offset(dir, d_col) else {
            continue;
        };
        if is_en_passant_capture(board, side, target, previous) {
            moves.push(Move::en_passant(board, pawn, origin, target)?);
        } else if board.get(target).opposes(pawn) {
            push_with_promotions(board, pawn, side, origin, target, &mut moves)?;
        }
    }

    Ok(moves)
}

/// Pushes one move, or one per promotion choice when `target` is on the far rank.
fn push_with_promotions(
    board: &Board,
    pawn: Piece,
    side: Side,
    origin: Cell,
    target: Cell,
    moves: &mut Vec<Move>,
) -> Result<(), ChessError> {
    if target.row() == side.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            let promoted = Piece::new(side, kind);
            moves.push(Move::with_promotion(board, pawn, origin, target, Some(promoted))?);
        }
    } else {
        moves.push(Move::new(board, pawn, origin, target)?);
    }
    Ok(())
}

/// Returns true if a `side` pawn landing on `target` takes en passant.
///
/// The previous move must be an opposing pawn's double step whose skipped
/// square is `target`, and that pawn must still stand where it landed.
pub fn is_en_passant_capture(board: &Board, side: Side, target: Cell, previous: Option<&Move>) -> bool {
    let Some(prev) = previous else {
        return false;
    };
    let them = side.opposite();
    if prev.piece() != Piece::new(them, PieceKind::Pawn) {
        return false;
    }

    let start = them.pawn_row() as i8;
    let skipped = start + them.pawn_direction();
    let landed = start + 2 * them.pawn_direction();

    prev.source().row() as i8 == start
        && prev.target().row() as i8 == landed
        && target.row() as i8 == skipped
        && target.col() == prev.source().col()
        && board.get(prev.target()) == prev.piece()
}

/// Castling candidates for a king standing on `origin`.
///
/// Only checks that the king and rook stand on their original squares with
/// nothing in between. Earlier king or rook moves and attacked transit
/// squares are not considered.
pub(super) fn castling_moves(board: &Board, origin: Cell, king: Piece, side: Side) -> Result<Vec<Move>, ChessError> {
    let mut moves = Vec::new();
    if origin != CastleSide::king_origin(side) {
        return Ok(moves);
    }

    let rook = Piece::new(side, PieceKind::Rook);
    for wing in CastleSide::BOTH {
        let rook_origin = wing.rook_travel(side).from;
        if board.get(rook_origin) != rook {
            continue;
        }
        if no_pieces_between(board, origin, rook_origin) {
            moves.push(Move::new(board, king, origin, wing.king_target(side))?);
        }
    }
    Ok(moves)
}

/// Returns true if every square strictly between two cells of the same row is empty.
fn no_pieces_between(board: &Board, a: Cell, b: Cell) -> bool {
    debug_assert_eq!(a.row(), b.row());
    let (low, high) = if a.col() < b.col() {
        (a.col(), b.col())
    } else {
        (b.col(), a.col())
    };
    (low + 1..high)
        .filter_map(|col| Cell::new(a.row() as i32, col as i32).ok())
        .all(|cell| board.is_vacant(cell))
}
