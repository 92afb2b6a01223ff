//! Plain-text board format.
//!
//! One line per row, top (rank 8) to bottom (rank 1). Each line carries eight
//! `|`-terminated fields holding a padded piece name, and a blank line
//! separates rows. Lines are written with `\r\n` endings; either ending is
//! accepted when reading:
//!
//! ```text
//! BLACK_ROOK  |NO_PIECE    |...
//!
//! BLACK_PAWN  |BLACK_PAWN  |...
//! ```

use crate::{Board, Cell, Piece};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width each piece name is padded to.
const FIELD_WIDTH: usize = 12;

/// Errors that can occur when reading a board from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardTextError {
    #[error("expected 8 rows, got {0}")]
    MissingRows(usize),

    #[error("row {row} has {fields} fields, expected at least 8")]
    MalformedRow { row: usize, fields: usize },

    #[error("unknown piece '{name}' at row {row}, col {col}")]
    UnknownPiece { row: usize, col: usize, name: String },
}

/// Parses the text format into a board.
///
/// Blank lines are skipped and anything after the eighth row is ignored.
pub fn parse_board(text: &str) -> Result<Board, BoardTextError> {
    let mut board = Board::empty();
    let mut rows = 0;

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        if rows == 8 {
            break;
        }

        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() < 8 {
            return Err(BoardTextError::MalformedRow {
                row: rows,
                fields: fields.len(),
            });
        }

        for (col, field) in fields.iter().take(8).enumerate() {
            let piece = Piece::from_name(field).ok_or_else(|| BoardTextError::UnknownPiece {
                row: rows,
                col,
                name: field.trim().to_string(),
            })?;
            // rows and col are both below 8 here
            if let Ok(cell) = Cell::new(rows as i32, col as i32) {
                board.place(cell, piece);
            }
        }
        rows += 1;
    }

    if rows < 8 {
        return Err(BoardTextError::MissingRows(rows));
    }
    Ok(board)
}

impl FromStr for Board {
    type Err = BoardTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in Cell::all().enumerate() {
            write!(f, "{:<width$}|", self.get(cell).name(), width = FIELD_WIDTH)?;
            if i % 8 == 7 {
                f.write_str("\r\n\r\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_survives_text() {
        let board = Board::standard();
        let text = board.to_string();
        assert_eq!(parse_board(&text), Ok(board));
    }

    #[test]
    fn layout() {
        let mut board = Board::empty();
        board.place(Cell::A8, Piece::DARK_ROOK);
        let text = board.to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("BLACK_ROOK  |NO_PIECE    |"));
        assert_eq!(first.matches('|').count(), 8);
        assert_eq!(text.lines().count(), 16);
        assert!(text.lines().nth(1).unwrap().is_empty());
    }

    #[test]
    fn rows_end_with_crlf() {
        let text = Board::standard().to_string();
        assert_eq!(text.matches("|\r\n\r\n").count(), 8);
        assert!(text.ends_with("|\r\n\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn parse_is_lenient_about_case_and_spacing() {
        let row = "no_piece|no_piece|no_piece|no_piece|white_king|no_piece|no_piece|no_piece|";
        let empty = "NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE";
        let mut text = String::new();
        for i in 0..8 {
            text.push_str(if i == 7 { row } else { empty });
            text.push_str("\r\n\r\n");
        }
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(Cell::E1), Piece::LIGHT_KING);
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn too_few_rows() {
        let text = "NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|NO_PIECE|\n";
        assert_eq!(parse_board(text), Err(BoardTextError::MissingRows(1)));
    }

    #[test]
    fn short_row() {
        let text = "NO_PIECE|NO_PIECE|\n";
        assert_eq!(
            parse_board(text),
            Err(BoardTextError::MalformedRow { row: 0, fields: 3 })
        );
    }

    #[test]
    fn unknown_piece() {
        let mut text = Board::empty().to_string();
        text = text.replacen("NO_PIECE", "PURPLE_KING", 1);
        assert_eq!(
            parse_board(&text),
            Err(BoardTextError::UnknownPiece {
                row: 0,
                col: 0,
                name: "PURPLE_KING".to_string()
            })
        );
    }
}
