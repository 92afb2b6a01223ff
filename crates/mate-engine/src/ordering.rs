//! Candidate ordering for the solver.
//!
//! Moves by stronger pieces are tried first: queen, rook, knight, bishop,
//! pawn, king. The sort is stable, so moves of equal priority keep their
//! generation order.

use mate_core::{Move, PieceKind};
use std::cmp::Ordering;

/// Lower values are searched first.
pub fn solver_priority(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::Queen => 1,
        PieceKind::Rook => 2,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 4,
        PieceKind::Pawn => 5,
        PieceKind::King => 6,
    }
}

fn move_priority(mv: &Move) -> u8 {
    mv.piece().kind().map_or(u8::MAX, solver_priority)
}

/// Compares two moves by the priority of the moving piece.
pub fn compare_for_solver(a: &Move, b: &Move) -> Ordering {
    move_priority(a).cmp(&move_priority(b))
}

/// Stable-sorts `moves` into solver order.
pub fn order_for_solver(moves: &mut [Move]) {
    moves.sort_by(compare_for_solver);
}
