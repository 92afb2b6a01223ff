//! Chess piece representation.

use crate::{ChessError, Side};
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in code order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
    ];

    /// Returns the index of this kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop
        )
    }

    const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Rook => "ROOK",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// The content of a square: one of the twelve colored pieces, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    None,
    Colored(Side, PieceKind),
}

impl Piece {
    pub const NO_PIECE: Piece = Piece::None;
    pub const LIGHT_PAWN: Piece = Piece::Colored(Side::Light, PieceKind::Pawn);
    pub const LIGHT_ROOK: Piece = Piece::Colored(Side::Light, PieceKind::Rook);
    pub const LIGHT_KNIGHT: Piece = Piece::Colored(Side::Light, PieceKind::Knight);
    pub const LIGHT_BISHOP: Piece = Piece::Colored(Side::Light, PieceKind::Bishop);
    pub const LIGHT_QUEEN: Piece = Piece::Colored(Side::Light, PieceKind::Queen);
    pub const LIGHT_KING: Piece = Piece::Colored(Side::Light, PieceKind::King);
    pub const DARK_PAWN: Piece = Piece::Colored(Side::Dark, PieceKind::Pawn);
    pub const DARK_ROOK: Piece = Piece::Colored(Side::Dark, PieceKind::Rook);
    pub const DARK_KNIGHT: Piece = Piece::Colored(Side::Dark, PieceKind::Knight);
    pub const DARK_BISHOP: Piece = Piece::Colored(Side::Dark, PieceKind::Bishop);
    pub const DARK_QUEEN: Piece = Piece::Colored(Side::Dark, PieceKind::Queen);
    pub const DARK_KING: Piece = Piece::Colored(Side::Dark, PieceKind::King);

    /// All thirteen values, "no piece" first.
    pub const ALL: [Piece; 13] = [
        Piece::NO_PIECE,
        Piece::LIGHT_PAWN,
        Piece::LIGHT_ROOK,
        Piece::LIGHT_KNIGHT,
        Piece::LIGHT_BISHOP,
        Piece::LIGHT_QUEEN,
        Piece::LIGHT_KING,
        Piece::DARK_PAWN,
        Piece::DARK_ROOK,
        Piece::DARK_KNIGHT,
        Piece::DARK_BISHOP,
        Piece::DARK_QUEEN,
        Piece::DARK_KING,
    ];

    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece::Colored(side, kind)
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::None => None,
            Piece::Colored(_, kind) => Some(kind),
        }
    }

    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Piece::None => None,
            Piece::Colored(side, _) => Some(side),
        }
    }

    /// Returns the side, failing for "no piece".
    pub fn require_side(self) -> Result<Side, ChessError> {
        self.side()
            .ok_or_else(|| ChessError::InvalidSide(self.name()))
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Piece::None)
    }

    /// Returns true if this is a piece of the given side and kind.
    #[inline]
    pub fn is(self, side: Side, kind: PieceKind) -> bool {
        self == Piece::Colored(side, kind)
    }

    /// Returns true if `self` and `other` are both pieces and belong to different sides.
    #[inline]
    pub fn opposes(self, other: Piece) -> bool {
        matches!((self.side(), other.side()), (Some(a), Some(b)) if a != b)
    }

    /// Compact storage code: 0 for no piece, 1-6 light, 11-16 dark.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Piece::None => 0,
            Piece::Colored(side, kind) => {
                let base = match side {
                    Side::Light => 1,
                    Side::Dark => 11,
                };
                base + kind as u8
            }
        }
    }

    /// Inverse of [`Piece::code`].
    pub const fn from_code(code: u8) -> Option<Self> {
        let (side, offset) = match code {
            0 => return Some(Piece::None),
            1..=6 => (Side::Light, code - 1),
            11..=16 => (Side::Dark, code - 11),
            _ => return None,
        };
        let kind = match offset {
            0 => PieceKind::Pawn,
            1 => PieceKind::Rook,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        };
        Some(Piece::Colored(side, kind))
    }

    /// Stable persisted name, e.g. `WHITE_QUEEN` or `NO_PIECE`.
    pub fn name(self) -> String {
        match self {
            Piece::None => "NO_PIECE".to_string(),
            Piece::Colored(side, kind) => {
                let prefix = match side {
                    Side::Light => "WHITE",
                    Side::Dark => "BLACK",
                };
                format!("{}_{}", prefix, kind.name())
            }
        }
    }

    /// Parses a persisted name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Piece::ALL
            .into_iter()
            .find(|piece| piece.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
