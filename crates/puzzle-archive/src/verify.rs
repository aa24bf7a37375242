//! Replays archived main lines through a solving session, submitting each hint,
//! to confirm the parser and the session agree on every record.

use chrono::NaiveDate;
use tracing::{debug, warn};

use puzzle_core::{MoveOutcome, PuzzleRecord, SolvingSession};

use crate::index::PuzzleArchiveIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayFailure {
    pub date: Option<NaiveDate>,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub solved: usize,
    pub failures: Vec<ReplayFailure>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Play a record from start to finish using only hints. Returns the number of
/// user moves submitted.
pub fn replay_record(record: &PuzzleRecord) -> Result<usize, String> {
    let mut session = SolvingSession::standard(record).map_err(|e| e.to_string())?;
    let mut submitted = 0;

    while !session.is_solved() {
        let hint = session.request_hint().map_err(|e| e.to_string())?;
        match session.submit_move(hint) {
            MoveOutcome::Correct { .. } => submitted += 1,
            other => return Err(format!("hint {hint} was not accepted: {other:?}")),
        }
        if session.failed_attempts() != 0 {
            return Err(format!("{} failed attempts after a hint", session.failed_attempts()));
        }
    }

    Ok(submitted)
}

pub fn replay_all(index: &PuzzleArchiveIndex) -> VerifyReport {
    let mut report = VerifyReport::default();
    for (date, record) in index.iter() {
        match replay_record(record) {
            Ok(moves) => {
                debug!(%date, moves, "Replayed puzzle");
                report.solved += 1;
            }
            Err(reason) => {
                warn!(%date, %reason, "Puzzle failed to replay");
                report.failures.push(ReplayFailure {
                    date: Some(*date),
                    reason,
                });
            }
        }
    }
    report
}
