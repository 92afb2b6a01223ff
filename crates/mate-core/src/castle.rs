//! Castling geometry.

use crate::{Cell, Side};

/// A (from, to) pair of cells, used to describe where the castling rook travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPair {
    pub from: Cell,
    pub to: Cell,
}

impl CellPair {
    #[inline]
    pub const fn new(from: Cell, to: Cell) -> Self {
        CellPair { from, to }
    }
}

/// Which wing a king castles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    /// The square the king starts on for `side`.
    #[inline]
    pub const fn king_origin(side: Side) -> Cell {
        match side {
            Side::Light => Cell::E1,
            Side::Dark => Cell::E8,
        }
    }

    /// The square the king lands on.
    #[inline]
    pub const fn king_target(self, side: Side) -> Cell {
        match (side, self) {
            (Side::Light, CastleSide::Kingside) => Cell::G1,
            (Side::Light, CastleSide::Queenside) => Cell::C1,
            (Side::Dark, CastleSide::Kingside) => Cell::G8,
            (Side::Dark, CastleSide::Queenside) => Cell::C8,
        }
    }

    /// Where the rook travels from and to.
    #[inline]
    pub const fn rook_travel(self, side: Side) -> CellPair {
        match (side, self) {
            (Side::Light, CastleSide::Kingside) => CellPair::new(Cell::H1, Cell::F1),
            (Side::Light, CastleSide::Queenside) => CellPair::new(Cell::A1, Cell::D1),
            (Side::Dark, CastleSide::Kingside) => CellPair::new(Cell::H8, Cell::F8),
            (Side::Dark, CastleSide::Queenside) => CellPair::new(Cell::A8, Cell::D8),
        }
    }

    /// Identifies a castle from the king's origin and target squares.
    pub fn detect(side: Side, origin: Cell, target: Cell) -> Option<CastleSide> {
        if origin != Self::king_origin(side) {
            return None;
        }
        CastleSide::BOTH
            .into_iter()
            .find(|wing| wing.king_target(side) == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_castles() {
        assert_eq!(
            CastleSide::detect(Side::Light, Cell::E1, Cell::G1),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            CastleSide::detect(Side::Dark, Cell::E8, Cell::C8),
            Some(CastleSide::Queenside)
        );
        assert_eq!(CastleSide::detect(Side::Light, Cell::E1, Cell::F1), None);
        assert_eq!(CastleSide::detect(Side::Dark, Cell::E1, Cell::G1), None);
    }

    #[test]
    fn rook_travel() {
        let pair = CastleSide::Queenside.rook_travel(Side::Light);
        assert_eq!(pair.from, Cell::A1);
        assert_eq!(pair.to, Cell::D1);
    }
}
