//! End-to-end checks on known positions, loaded through the board text format.

use mate_core::{parse_board, Board, Cell, Move, Piece, Side};
use mate_engine::{
    apply_move, check_playable, generate_moves, is_checkmate, is_in_check, is_stalemate, status,
    SetupError, Solver, Status,
};
use std::time::Duration;

const PLENTY: Duration = Duration::from_secs(120);

/// Builds board text from a sparse list of placements, then parses it back.
fn load(pieces: &[(&str, Piece)]) -> Board {
    let mut board = Board::empty();
    for (label, piece) in pieces {
        board.place(Cell::from_label(label).unwrap(), *piece);
    }
    parse_board(&board.to_string()).unwrap()
}

fn cell(label: &str) -> Cell {
    Cell::from_label(label).unwrap()
}

#[test]
fn two_rook_back_rank_mate_from_text() {
    let text = "\
BLACK_ROOK  |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |BLACK_KING  |NO_PIECE    |

NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |

NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |

NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |

NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |

NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |

NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |

NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |NO_PIECE    |WHITE_KING  |NO_PIECE    |
";
    // The dark rook in the corner is only filler; swap it for the light rooks.
    let mut board = parse_board(text).unwrap();
    board.place(Cell::A8, Piece::LIGHT_ROOK);
    board.place(cell("B7"), Piece::LIGHT_ROOK);

    assert!(is_in_check(&board, Side::Dark, None).unwrap());
    assert!(is_checkmate(&board, Side::Dark, None).unwrap());
    assert!(!is_stalemate(&board, Side::Dark, None).unwrap());
    assert_eq!(status(&board, Side::Light, None).unwrap(), Status::Normal);
}

#[test]
fn cornered_king_stalemate() {
    let board = load(&[
        ("H8", Piece::DARK_KING),
        ("F7", Piece::LIGHT_QUEEN),
        ("A1", Piece::LIGHT_KING),
    ]);
    assert!(is_stalemate(&board, Side::Dark, None).unwrap());
    assert!(!is_checkmate(&board, Side::Dark, None).unwrap());
    assert!(generate_moves(&board, Side::Dark, None, true).unwrap().is_empty());
}

#[test]
fn solver_finds_smothered_mate_in_one() {
    let board = load(&[
        ("H8", Piece::DARK_KING),
        ("G8", Piece::DARK_ROOK),
        ("G7", Piece::DARK_PAWN),
        ("H7", Piece::DARK_PAWN),
        ("E5", Piece::LIGHT_KNIGHT),
        ("A1", Piece::LIGHT_KING),
    ]);
    check_playable(&board).unwrap();

    let mut solver = Solver::new(board.clone(), Side::Light, None);
    assert!(solver.try_solve(1, PLENTY).unwrap());

    let mate = Move::new(&board, Piece::LIGHT_KNIGHT, cell("E5"), cell("F7")).unwrap();
    assert_eq!(solver.best_move(), Some(mate));

    let after = apply_move(&board, &mate).unwrap();
    assert!(is_checkmate(&after, Side::Dark, Some(&mate)).unwrap());
}

#[test]
fn solver_needs_two_moves_for_the_rook_ladder() {
    let board = load(&[
        ("G7", Piece::DARK_KING),
        ("A6", Piece::LIGHT_ROOK),
        ("B1", Piece::LIGHT_ROOK),
        ("A1", Piece::LIGHT_KING),
    ]);

    let mut solver = Solver::new(board.clone(), Side::Light, None);
    assert!(!solver.try_solve(1, PLENTY).unwrap());
    assert!(solver.best_move().is_none());

    let solution = solver.solve(2, PLENTY).unwrap().unwrap();
    assert_eq!(solution.moves, 2);

    // Whatever the first move is, every defence still loses to a mate in one.
    let first = solution.best_move;
    let after = apply_move(&board, &first).unwrap();
    for reply in &generate_moves(&after, Side::Dark, Some(&first), true).unwrap() {
        let answered = apply_move(&after, reply).unwrap();
        let mut follow_up = Solver::new(answered, Side::Light, Some(*reply));
        assert!(follow_up.try_solve(1, PLENTY).unwrap(), "no mate after {}", reply);
    }
}

#[test]
fn solver_mates_rather_than_stalemates() {
    // Queen to F7 would stalemate, queen to G7 mates.
    let board = load(&[
        ("H8", Piece::DARK_KING),
        ("F6", Piece::LIGHT_KING),
        ("A7", Piece::LIGHT_QUEEN),
    ]);
    let mut solver = Solver::new(board.clone(), Side::Light, None);
    let solution = solver.solve(1, PLENTY).unwrap().unwrap();
    assert_eq!(solution.best_move.target(), cell("G7"));
    let after = apply_move(&board, &solution.best_move).unwrap();
    assert!(is_checkmate(&after, Side::Dark, Some(&solution.best_move)).unwrap());
}

#[test]
fn setups_are_validated() {
    let board = load(&[("E1", Piece::LIGHT_KING), ("E8", Piece::DARK_KING)]);
    assert!(check_playable(&board).is_ok());

    let board = load(&[("E1", Piece::LIGHT_KING)]);
    assert_eq!(check_playable(&board), Err(SetupError::MissingKing(Side::Dark)));

    let board = load(&[
        ("G8", Piece::DARK_KING),
        ("A8", Piece::LIGHT_ROOK),
        ("B7", Piece::LIGHT_ROOK),
        ("G1", Piece::LIGHT_KING),
    ]);
    assert_eq!(
        check_playable(&board),
        Err(SetupError::AlreadyCheckmated(Side::Dark))
    );
}
