//! Move representation.

use crate::{Board, CastleSide, Cell, CellPair, ChessError, Piece, PieceKind};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A move validated against the board it was built from.
///
/// Capture, castle and en-passant metadata is derived at construction time.
/// Equality and hashing only look at piece, source, target and promotion,
/// since everything else follows from those on a given board.
#[derive(Clone, Copy)]
pub struct Move {
    piece: Piece,
    source: Cell,
    target: Cell,
    promotion: Option<Piece>,
    captured: Option<Piece>,
    castle: Option<CastleSide>,
    en_passant_cell: Option<Cell>,
}

impl Move {
    /// Builds a non-promoting move of `piece` from `source` to `target`.
    pub fn new(board: &Board, piece: Piece, source: Cell, target: Cell) -> Result<Self, ChessError> {
        Self::with_promotion(board, piece, source, target, None)
    }

    /// Builds a move, validating it against `board`.
    ///
    /// Fails if `source` does not hold `piece`, if `source == target`, or if
    /// the promotion piece is missing, misplaced or not a legal choice. An
    /// occupied target is recorded as a capture whatever its side, so that
    /// setup edits can replace pieces.
    pub fn with_promotion(
        board: &Board,
        piece: Piece,
        source: Cell,
        target: Cell,
        promotion: Option<Piece>,
    ) -> Result<Self, ChessError> {
        let side = match piece.side() {
            Some(side) => side,
            None => return Err(ChessError::IllegalMove("no piece to move".to_string())),
        };

        let found = board.get(source);
        if found != piece {
            return Err(ChessError::IllegalMove(format!(
                "source cell {} contains {} rather than {}",
                source, found, piece
            )));
        }

        if source == target {
            return Err(ChessError::IllegalMove(format!(
                "source and target cells ({}) are the same",
                source
            )));
        }

        let promotes = piece.kind() == Some(PieceKind::Pawn) && target.row() == side.promotion_row();
        match (promotes, promotion) {
            (true, Some(promoted))
                if promoted.side() == Some(side)
                    && promoted.kind().is_some_and(PieceKind::is_promotion_target) => {}
            (true, _) => {
                return Err(ChessError::IllegalMove(format!(
                    "{} reaching {} must promote to a queen, rook, knight or bishop of its side",
                    piece, target
                )));
            }
            (false, Some(promoted)) => {
                return Err(ChessError::IllegalMove(format!(
                    "{} to {} is not a promotion (got {})",
                    piece, target, promoted
                )));
            }
            (false, None) => {}
        }

        let captured = board.is_occupied(target).then(|| board.get(target));
        let castle = if piece.kind() == Some(PieceKind::King) {
            CastleSide::detect(side, source, target)
        } else {
            None
        };

        Ok(Move {
            piece,
            source,
            target,
            promotion,
            captured,
            castle,
            en_passant_cell: None,
        })
    }

    /// Builds an en-passant capture.
    ///
    /// The captured pawn sits one rank behind `target`, towards the mover's origin.
    pub fn en_passant(board: &Board, pawn: Piece, source: Cell, target: Cell) -> Result<Self, ChessError> {
        if pawn.kind() != Some(PieceKind::Pawn) {
            return Err(ChessError::IllegalMove(format!(
                "only pawns capture en passant, not {}",
                pawn
            )));
        }
        let mut mv = Self::new(board, pawn, source, target)?;
        let side = pawn.require_side()?;
        let capture_cell = target.offset(-side.pawn_direction(), 0).ok_or_else(|| {
            ChessError::IllegalMove(format!("no en-passant capture square behind {}", target))
        })?;

        let passed = board.get(capture_cell);
        if passed != Piece::new(side.opposite(), PieceKind::Pawn) {
            return Err(ChessError::IllegalMove(format!(
                "en passant to {} needs an opposing pawn on {}, found {}",
                target, capture_cell, passed
            )));
        }

        mv.captured = Some(passed);
        mv.en_passant_cell = Some(capture_cell);
        Ok(mv)
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn source(&self) -> Cell {
        self.source
    }

    #[inline]
    pub fn target(&self) -> Cell {
        self.target
    }

    /// The piece the pawn becomes, if this is a promotion.
    #[inline]
    pub fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The piece taken by this move (the passed pawn for en passant).
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    pub fn castle_side(&self) -> Option<CastleSide> {
        self.castle
    }

    /// Where the rook travels, for castling moves.
    pub fn rook_travel(&self) -> Option<CellPair> {
        let side = self.piece.side()?;
        self.castle.map(|wing| wing.rook_travel(side))
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant_cell.is_some()
    }

    /// The cell of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_cell(&self) -> Option<Cell> {
        self.en_passant_cell
    }

    /// The piece standing on the target after the move.
    #[inline]
    pub fn landing_piece(&self) -> Piece {
        self.promotion.unwrap_or(self.piece)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.piece == other.piece
            && self.source == other.source
            && self.target == other.target
            && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece.hash(state);
        self.source.hash(state);
        self.target.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} to {}", self.piece, self.source, self.target)?;
        if let Some(promoted) = self.promotion {
            write!(f, " promoting to {}", promoted)?;
        }
        Ok(())
    }
}
