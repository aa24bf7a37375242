//! Puzzle solving session: the user reproduces the main line move by move while
//! the prescribed replies are played automatically.

use serde::Serialize;
use tracing::debug;

use crate::error::{IllegalMove, PuzzleError, SessionError};
use crate::record::{PuzzleRecord, Side};
use crate::rules::{AppliedMove, MoveIntent, RulesEngine, Shakmaty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    InProgress,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mover {
    User,
    Opponent,
}

/// Result of a single submission. Never an error: the caller updates its UI from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Matched the main line. `reply` is the automated answer, if one was due.
    Correct { san: String, reply: Option<String> },
    /// Legal, but not the prescribed move. Nothing was played.
    WrongSolution { san: String },
    Illegal(IllegalMove),
    AlreadySolved,
}

impl MoveOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, MoveOutcome::Correct { .. })
    }
}

/// A move that has been played on the session board.
#[derive(Debug, Clone)]
pub struct PlayedMove<P> {
    pub san: String,
    pub intent: MoveIntent,
    pub by: Mover,
    /// Position after the move.
    pub position: P,
}

/// Live state of one puzzle attempt.
///
/// The whole main line is replayed once at construction, so every automated reply
/// is known to be legal before the user makes a move.
#[derive(Debug, Clone)]
pub struct SolvingSession<R: RulesEngine = Shakmaty> {
    engine: R,
    main_line: Vec<String>,
    /// Main line resolved against the starting position, one entry per ply.
    solution: Vec<AppliedMove<R::Position>>,
    /// Index into `main_line` of the next expected move.
    cursor: usize,
    start: R::Position,
    position: R::Position,
    played: Vec<PlayedMove<R::Position>>,
    failed_attempts: u32,
    status: SessionStatus,
}

impl SolvingSession<Shakmaty> {
    /// Session using standard chess rules.
    pub fn standard(record: &PuzzleRecord) -> Result<Self, PuzzleError> {
        Self::new(record, Shakmaty)
    }
}

impl<R: RulesEngine> SolvingSession<R> {
    pub fn new(record: &PuzzleRecord, engine: R) -> Result<Self, PuzzleError> {
        let (start, solution) = resolve_line(&engine, record)?;
        Ok(Self {
            engine,
            main_line: record.main_line.clone(),
            solution,
            cursor: 0,
            position: start.clone(),
            start,
            played: Vec::new(),
            failed_attempts: 0,
            status: SessionStatus::InProgress,
        })
    }

    /// Reset the session onto another record. On error the session is left as it was.
    pub fn initialize(&mut self, record: &PuzzleRecord) -> Result<(), PuzzleError> {
        let (start, solution) = resolve_line(&self.engine, record)?;
        self.main_line = record.main_line.clone();
        self.solution = solution;
        self.cursor = 0;
        self.position = start.clone();
        self.start = start;
        self.played.clear();
        self.failed_attempts = 0;
        self.status = SessionStatus::InProgress;
        Ok(())
    }

    /// Validate `candidate` against the next expected move and, when it matches,
    /// play it together with the prescribed reply.
    pub fn submit_move(&mut self, candidate: MoveIntent) -> MoveOutcome {
        let outcome = self.evaluate(candidate);
        debug!(
            mv = %candidate,
            ?outcome,
            failed_attempts = self.failed_attempts,
            remaining = self.expected_moves().len(),
            "move submitted"
        );
        outcome
    }

    fn evaluate(&mut self, candidate: MoveIntent) -> MoveOutcome {
        if self.status == SessionStatus::Solved {
            return MoveOutcome::AlreadySolved;
        }

        let applied = match self.engine.apply_move(&self.position, &candidate) {
            Ok(applied) => applied,
            Err(illegal) => {
                self.failed_attempts += 1;
                return MoveOutcome::Illegal(illegal);
            }
        };

        if applied.san != self.solution[self.cursor].san {
            self.failed_attempts += 1;
            return MoveOutcome::WrongSolution { san: applied.san };
        }

        let san = applied.san.clone();
        self.play(applied, Mover::User);
        self.failed_attempts = 0;

        let reply = match self.solution.get(self.cursor).cloned() {
            Some(prescribed) => {
                let reply_san = prescribed.san.clone();
                self.play(prescribed, Mover::Opponent);
                Some(reply_san)
            }
            None => None,
        };

        if self.cursor == self.solution.len() {
            self.status = SessionStatus::Solved;
        }

        MoveOutcome::Correct { san, reply }
    }

    fn play(&mut self, applied: AppliedMove<R::Position>, by: Mover) {
        self.position = applied.position.clone();
        self.played.push(PlayedMove {
            san: applied.san,
            intent: applied.intent,
            by,
            position: applied.position,
        });
        self.cursor += 1;
    }

    /// The move the user is expected to play next.
    pub fn request_hint(&self) -> Result<MoveIntent, SessionError> {
        match (self.status, self.solution.get(self.cursor)) {
            (SessionStatus::InProgress, Some(next)) => Ok(next.intent),
            _ => Err(SessionError::Solved),
        }
    }

    /// Position right after `played_moves()[index]`, for previewing history.
    pub fn replay_at(&self, index: usize) -> Result<&R::Position, SessionError> {
        self.played
            .get(index)
            .map(|played| &played.position)
            .ok_or(SessionError::OutOfHistory(index))
    }

    pub fn replay_fen_at(&self, index: usize) -> Result<String, SessionError> {
        self.replay_at(index).map(|pos| self.engine.fen(pos))
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == SessionStatus::Solved
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Remaining suffix of the main line, as written in the record.
    pub fn expected_moves(&self) -> &[String] {
        &self.main_line[self.cursor..]
    }

    pub fn played_moves(&self) -> &[PlayedMove<R::Position>] {
        &self.played
    }

    pub fn position(&self) -> &R::Position {
        &self.position
    }

    pub fn starting_position(&self) -> &R::Position {
        &self.start
    }

    pub fn fen(&self) -> String {
        self.engine.fen(&self.position)
    }

    /// The side the user plays: whoever moves first from the starting position.
    pub fn player(&self) -> Side {
        self.engine.side_to_move(&self.start)
    }

    pub fn legal_moves(&self) -> Vec<MoveIntent> {
        self.engine.legal_moves(&self.position)
    }
}

fn resolve_line<R: RulesEngine>(
    engine: &R,
    record: &PuzzleRecord,
) -> Result<(R::Position, Vec<AppliedMove<R::Position>>), PuzzleError> {
    if record.main_line.is_empty() {
        return Err(PuzzleError::EmptySolution);
    }

    let start = engine.setup(&record.starting_fen)?;
    let mut solution = Vec::with_capacity(record.main_line.len());
    let mut pos = start.clone();

    for (ply, san) in record.main_line.iter().enumerate() {
        let applied = engine
            .apply_san(&pos, san)
            .map_err(|_| PuzzleError::UnplayableLine { ply, san: san.clone() })?;
        pos = applied.position.clone();
        solution.push(applied);
    }

    Ok((start, solution))
}

/// When to offer a hint to the user. The session itself answers hint requests
/// unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPolicy {
    pub after_failures: u32,
}

impl Default for HintPolicy {
    fn default() -> Self {
        Self { after_failures: 3 }
    }
}

impl HintPolicy {
    pub fn should_offer<R: RulesEngine>(&self, session: &SolvingSession<R>) -> bool {
        !session.is_solved() && session.failed_attempts() >= self.after_failures
    }
}
