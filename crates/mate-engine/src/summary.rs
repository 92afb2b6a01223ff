//! Aggregated move lists.

use mate_core::{Move, PieceKind, Side};

/// All moves generated for one side at one node, indexed for quick lookups.
///
/// Besides the flat list, moves are bucketed by the kind of the moving piece
/// and by the kind of the captured piece, so "can anything take the king?"
/// is answered without rescanning.
#[derive(Debug, Clone)]
pub struct MovesSummary {
    side: Side,
    moves: Vec<Move>,
    by_kind: [Vec<usize>; 6],
    by_captured: [Vec<usize>; 6],
}

impl MovesSummary {
    /// Creates an empty summary for `side`.
    pub fn new(side: Side) -> Self {
        MovesSummary {
            side,
            moves: Vec::new(),
            by_kind: Default::default(),
            by_captured: Default::default(),
        }
    }

    /// Appends moves, updating the indexes.
    pub fn add_moves<I>(&mut self, moves: I) -> &mut Self
    where
        I: IntoIterator<Item = Move>,
    {
        for mv in moves {
            let index = self.moves.len();
            if let Some(kind) = mv.piece().kind() {
                self.by_kind[kind.index()].push(index);
            }
            if let Some(kind) = mv.captured().and_then(|piece| piece.kind()) {
                self.by_captured[kind.index()].push(index);
            }
            self.moves.push(mv);
        }
        self
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by pieces of `kind`.
    pub fn moves_of_kind(&self, kind: PieceKind) -> impl Iterator<Item = &Move> + '_ {
        self.by_kind[kind.index()].iter().map(|&i| &self.moves[i])
    }

    /// Moves that capture a piece of `kind`.
    pub fn captures_of(&self, kind: PieceKind) -> impl Iterator<Item = &Move> + '_ {
        self.by_captured[kind.index()].iter().map(|&i| &self.moves[i])
    }

    /// Returns true if any move takes a king.
    #[inline]
    pub fn captures_king(&self) -> bool {
        !self.by_captured[PieceKind::King.index()].is_empty()
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

impl<'a> IntoIterator for &'a MovesSummary {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
