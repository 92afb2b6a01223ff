//! Solve results, as human-readable text or JSON.

use mate_core::{Move, Side};
use mate_engine::SolverCounters;
use serde::Serialize;
use std::fmt;

/// JSON view of a single move.
#[derive(Debug, Serialize, PartialEq)]
pub struct MoveJson {
    piece: String,
    from: String,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    promotion: Option<String>,
    description: String,
}

impl From<&Move> for MoveJson {
    fn from(mv: &Move) -> Self {
        MoveJson {
            piece: mv.piece().name(),
            from: mv.source().label(),
            to: mv.target().label(),
            promotion: mv.promotion().map(|piece| piece.name()),
            description: mv.to_string(),
        }
    }
}

/// Work done for one move budget.
#[derive(Debug, Serialize, PartialEq)]
pub struct Attempt {
    pub max_moves: u32,
    pub found: bool,
    pub elapsed_seconds: f64,
    pub recursion_count: u64,
    pub moves_evaluated: u64,
}

impl Attempt {
    pub fn new(max_moves: u32, found: bool, counters: SolverCounters) -> Self {
        Attempt {
            max_moves,
            found,
            elapsed_seconds: counters.elapsed_seconds(),
            recursion_count: counters.recursion_count,
            moves_evaluated: counters.moves_evaluated,
        }
    }
}

/// Outcome of a `solve` run across all budgets tried.
#[derive(Debug, Serialize, PartialEq)]
pub struct SolveReport {
    side: String,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mate_in: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_move: Option<MoveJson>,
    attempts: Vec<Attempt>,
}

impl SolveReport {
    pub fn new(side: Side) -> Self {
        SolveReport {
            side: side.to_string(),
            solved: false,
            mate_in: None,
            best_move: None,
            attempts: Vec::new(),
        }
    }

    pub fn record(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    pub fn set_solution(&mut self, mate_in: u32, best_move: &Move) {
        self.solved = true;
        self.mate_in = Some(mate_in);
        self.best_move = Some(best_move.into());
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attempt in &self.attempts {
            writeln!(
                f,
                "max # moves: {}, elapsed seconds: {:.3}, recursion count: {}, moves count: {}",
                attempt.max_moves, attempt.elapsed_seconds, attempt.recursion_count, attempt.moves_evaluated
            )?;
        }
        match (&self.best_move, self.mate_in) {
            (Some(best), Some(n)) => write!(f, "{} mates in {}: {}", self.side, n, best.description),
            _ => write!(f, "No forced mate found for {}", self.side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mate_core::{Board, Cell, Piece};
    use std::time::Duration;

    fn sample_move() -> Move {
        let mut board = Board::empty();
        board.place(Cell::A1, Piece::LIGHT_ROOK);
        Move::new(&board, Piece::LIGHT_ROOK, Cell::A1, Cell::A8).unwrap()
    }

    fn counters() -> SolverCounters {
        SolverCounters {
            elapsed: Duration::from_millis(1500),
            recursion_count: 7,
            moves_evaluated: 42,
        }
    }

    #[test]
    fn test_solved_report_json() {
        let mut report = SolveReport::new(Side::Light);
        report.record(Attempt::new(1, true, counters()));
        report.set_solution(1, &sample_move());

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["side"], "Light");
        assert_eq!(json["solved"], true);
        assert_eq!(json["mate_in"], 1);
        assert_eq!(json["best_move"]["piece"], "WHITE_ROOK");
        assert_eq!(json["best_move"]["from"], "A1");
        assert_eq!(json["best_move"]["to"], "A8");
        assert!(json["best_move"].get("promotion").is_none());
        assert_eq!(json["attempts"][0]["recursion_count"], 7);
        assert_eq!(json["attempts"][0]["elapsed_seconds"], 1.5);
    }

    #[test]
    fn test_unsolved_report_omits_solution() {
        let mut report = SolveReport::new(Side::Dark);
        report.record(Attempt::new(1, false, counters()));
        assert!(!report.is_solved());

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["solved"], false);
        assert!(json.get("best_move").is_none());
        assert!(json.get("mate_in").is_none());
    }

    #[test]
    fn test_text_report() {
        let mut report = SolveReport::new(Side::Light);
        report.record(Attempt::new(1, true, counters()));
        report.set_solution(1, &sample_move());
        let text = report.to_string();
        assert!(text.contains("max # moves: 1, elapsed seconds: 1.500, recursion count: 7, moves count: 42"));
        assert!(text.ends_with("Light mates in 1: WHITE_ROOK from A1 to A8"));

        let report = SolveReport::new(Side::Dark);
        assert_eq!(report.to_string(), "No forced mate found for Dark");
    }
}
