//! Error types for record parsing and session setup

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Malformed record: {0}")]
    MalformedRecord(&'static str),

    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("Main line is not playable at ply {ply} ({san})")]
    UnplayableLine { ply: usize, san: String },

    #[error("Main line has no moves")]
    EmptySolution,
}

/// The rules engine refused a move in the given position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Illegal move {mv} in position {fen}")]
pub struct IllegalMove {
    pub mv: String,
    pub fen: String,
}

/// Queries that have no answer in the session's current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Puzzle is already solved")]
    Solved,

    #[error("Position {0} is out of the move history")]
    OutOfHistory(usize),
}
