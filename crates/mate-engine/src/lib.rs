//! Chess rules and a bounded forced-mate solver.
//!
//! This crate provides:
//! - [`movegen`] - move generation, check detection, move application and undo
//! - [`MovesSummary`] - the moves of one side, indexed by mover and capture
//! - [`status()`] and [`check_playable`] - position status and setup validation
//! - [`Solver`] - searches for a forced mate within a move and time budget
//!
//! # Example
//!
//! ```
//! use mate_core::{Board, Side};
//! use mate_engine::{generate_moves, Solver};
//! use std::time::Duration;
//!
//! let board = Board::standard();
//! let moves = generate_moves(&board, Side::Light, None, true).unwrap();
//! assert_eq!(moves.len(), 20);
//!
//! let mut solver = Solver::new(board, Side::Light, None);
//! assert!(!solver.try_solve(1, Duration::from_secs(5)).unwrap());
//! ```

pub mod movegen;
mod ordering;
mod solver;
mod status;
mod summary;

pub use movegen::{
    apply_move, generate_moves, is_checkmate, is_in_check, is_legal_move, is_stalemate, locate_king,
    locate_kings, moves_for_piece, undo_move, validate_move,
};
pub use ordering::{compare_for_solver, order_for_solver, solver_priority};
pub use solver::{Solution, Solver, SolverCounters};
pub use status::{check_playable, status, SetupError, Status};
pub use summary::MovesSummary;
