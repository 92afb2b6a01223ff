//! Forced-mate search.
//!
//! The solver runs an AND/OR search over the game tree: at its own nodes the
//! solving side needs a single move that works, at the opponent's nodes every
//! reply must still lose. The search is bounded by a number of solving-side
//! moves and by a wall-clock budget that is checked once per node.

use crate::movegen::{apply_move, generate_moves, is_checkmate, is_stalemate};
use crate::ordering::order_for_solver;
use mate_core::{Board, ChessError, Move, Side};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Work done by the most recent solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverCounters {
    pub elapsed: Duration,
    pub recursion_count: u64,
    pub moves_evaluated: u64,
}

impl SolverCounters {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// A forced mate: the first move to play and the number of moves it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub best_move: Move,
    pub moves: u32,
}

/// Searches for a forced checkmate by one side.
#[derive(Debug)]
pub struct Solver {
    board: Board,
    side: Side,
    previous: Option<Move>,
    best_move: Option<Move>,
    started: Instant,
    max_time: Duration,
    finished: Option<Duration>,
    recursion_count: u64,
    moves_evaluated: u64,
}

impl Solver {
    /// Creates a solver for `side` to move on `board`.
    ///
    /// `previous` is the move that led to the position, needed for en passant.
    pub fn new(board: Board, side: Side, previous: Option<Move>) -> Self {
        Solver {
            board,
            side,
            previous,
            best_move: None,
            started: Instant::now(),
            max_time: Duration::ZERO,
            finished: Some(Duration::ZERO),
            recursion_count: 0,
            moves_evaluated: 0,
        }
    }

    /// Looks for a mate in at most `max_moves` moves of the solving side.
    ///
    /// Returns false when there is none, or when the time ran out first.
    /// Counters and the best move are reset on every call.
    pub fn try_solve(&mut self, max_moves: u32, max_time: Duration) -> Result<bool, ChessError> {
        self.best_move = None;
        self.recursion_count = 0;
        self.moves_evaluated = 0;
        self.finished = None;
        self.max_time = max_time;
        self.started = Instant::now();

        debug!(side = %self.side, max_moves, ?max_time, "solve started");

        let found = if max_moves == 0 {
            false
        } else {
            let board = self.board.clone();
            let previous = self.previous;
            self.search(max_moves, max_moves, &board, previous.as_ref())?
        };

        let elapsed = self.started.elapsed();
        self.finished = Some(elapsed);
        debug!(
            max_moves,
            found,
            elapsed_secs = elapsed.as_secs_f64(),
            recursion_count = self.recursion_count,
            moves_evaluated = self.moves_evaluated,
            "solve finished"
        );

        Ok(found)
    }

    /// Tries budgets 1, 2, ... up to `max_moves` and returns the shortest mate found.
    ///
    /// Each budget gets the full `max_time`.
    pub fn solve(&mut self, max_moves: u32, max_time: Duration) -> Result<Option<Solution>, ChessError> {
        self.solve_with(max_moves, max_time, |_, _, _| {})
    }

    /// Like [`Solver::solve`], calling `on_attempt(budget, found, counters)`
    /// after each budget is tried.
    pub fn solve_with<F>(
        &mut self,
        max_moves: u32,
        max_time: Duration,
        mut on_attempt: F,
    ) -> Result<Option<Solution>, ChessError>
    where
        F: FnMut(u32, bool, SolverCounters),
    {
        for budget in 1..=max_moves {
            let found = self.try_solve(budget, max_time)?;
            on_attempt(budget, found, self.counters());
            if found {
                return Ok(self.best_move.map(|best_move| Solution {
                    best_move,
                    moves: budget,
                }));
            }
        }
        Ok(None)
    }

    /// The first move of the mate found by the last successful solve.
    #[inline]
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    pub fn counters(&self) -> SolverCounters {
        SolverCounters {
            elapsed: self.finished.unwrap_or_else(|| self.started.elapsed()),
            recursion_count: self.recursion_count,
            moves_evaluated: self.moves_evaluated,
        }
    }

    fn deadline_passed(&self, max_moves: u32) -> bool {
        let elapsed = self.started.elapsed();
        trace!(
            max_moves,
            elapsed_secs = elapsed.as_secs_f64(),
            recursion_count = self.recursion_count,
            moves_evaluated = self.moves_evaluated,
            "deadline check"
        );
        elapsed > self.max_time
    }

    fn search(
        &mut self,
        max_moves: u32,
        remaining: u32,
        board: &Board,
        previous: Option<&Move>,
    ) -> Result<bool, ChessError> {
        self.recursion_count += 1;
        let at_root = remaining == max_moves;
        let opponent = self.side.opposite();

        let mut moves = generate_moves(board, self.side, previous, true)?.into_moves();
        self.moves_evaluated += moves.len() as u64;
        order_for_solver(&mut moves);

        // Mate right now
        for mv in &moves {
            let after = apply_move(board, mv)?;
            if is_checkmate(&after, opponent, Some(mv))? {
                if at_root {
                    self.best_move = Some(*mv);
                }
                return Ok(true);
            }
        }

        if remaining == 1 || self.deadline_passed(max_moves) {
            return Ok(false);
        }

        'candidates: for mv in &moves {
            let after = apply_move(board, mv)?;
            if is_stalemate(&after, opponent, Some(mv))? {
                continue;
            }

            let replies = generate_moves(&after, opponent, Some(mv), true)?.into_moves();
            self.moves_evaluated += replies.len() as u64;

            // A reply that ends the game in the opponent's favour rules the candidate out
            for reply in &replies {
                let answered = apply_move(&after, reply)?;
                if is_checkmate(&answered, self.side, Some(reply))?
                    || is_stalemate(&answered, self.side, Some(reply))?
                {
                    continue 'candidates;
                }
            }

            for reply in &replies {
                let answered = apply_move(&after, reply)?;
                if !self.search(max_moves, remaining - 1, &answered, Some(reply))? {
                    continue 'candidates;
                }
            }

            if at_root {
                self.best_move = Some(*mv);
            }
            return Ok(true);
        }

        Ok(false)
    }
}
