//! Player side representation.

use crate::ChessError;
use std::str::FromStr;

/// The two players. Light moves "up" the grid (towards row 0, rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Light = 0,
    Dark = 1,
}

impl Side {
    /// Both sides, light first.
    pub const BOTH: [Side; 2] = [Side::Light, Side::Dark];

    /// Returns the opposing side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Returns the index (0 for Light, 1 for Dark).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta of a single pawn step (-1 for Light, +1 for Dark).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Row holding this side's king and rooks in the opening setup.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Side::Light => 7,
            Side::Dark => 0,
        }
    }

    /// Row this side's pawns start on (and may double-step from).
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Side::Light => 6,
            Side::Dark => 1,
        }
    }

    /// Far rank where this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}

impl FromStr for Side {
    type Err = ChessError;

    /// Accepts `light`/`white` and `dark`/`black`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "white" => Ok(Side::Light),
            "dark" | "black" => Ok(Side::Dark),
            _ => Err(ChessError::InvalidSide(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Light.opposite(), Side::Dark);
        assert_eq!(Side::Dark.opposite(), Side::Light);
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Side::Light.pawn_direction(), -1);
        assert_eq!(Side::Dark.pawn_direction(), 1);
        assert_eq!(Side::Light.pawn_row(), 6);
        assert_eq!(Side::Dark.pawn_row(), 1);
        assert_eq!(Side::Light.promotion_row(), 0);
        assert_eq!(Side::Dark.promotion_row(), 7);
    }

    #[test]
    fn parse_side() {
        assert_eq!("light".parse::<Side>().unwrap(), Side::Light);
        assert_eq!("White".parse::<Side>().unwrap(), Side::Light);
        assert_eq!("DARK".parse::<Side>().unwrap(), Side::Dark);
        assert_eq!(" black ".parse::<Side>().unwrap(), Side::Dark);
        assert_eq!(
            "gray".parse::<Side>(),
            Err(ChessError::InvalidSide("gray".to_string()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Side::Light), "Light");
        assert_eq!(format!("{}", Side::Dark), "Dark");
    }
}
