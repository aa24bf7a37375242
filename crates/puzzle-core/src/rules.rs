//! Chess rules capability used by the solving session.
//!
//! The session never decides legality itself; it asks a [`RulesEngine`]. The
//! default engine is backed by shakmaty.

use std::fmt;
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role, Square};

use crate::error::{IllegalMove, PuzzleError};
use crate::record::Side;

/// A move as the user expresses it: source and target square plus an optional
/// promotion piece. Parses from and displays as UCI (`e2e4`, `e7e8q`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveIntent {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl MoveIntent {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to, promotion: None }
    }

    pub fn with_promotion(mut self, role: Role) -> Self {
        self.promotion = Some(role);
        self
    }

    fn to_uci(self) -> UciMove {
        UciMove::Normal {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }

    fn from_uci(uci: &UciMove) -> Option<Self> {
        match *uci {
            UciMove::Normal { from, to, promotion } => Some(Self { from, to, promotion }),
            _ => None,
        }
    }
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_uci().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveIntentError(pub String);

impl fmt::Display for ParseMoveIntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move {:?}", self.0)
    }
}

impl std::error::Error for ParseMoveIntentError {}

impl FromStr for MoveIntent {
    type Err = ParseMoveIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uci: UciMove = s.parse().map_err(|_| ParseMoveIntentError(s.to_string()))?;
        Self::from_uci(&uci).ok_or_else(|| ParseMoveIntentError(s.to_string()))
    }
}

/// A move the engine accepted, with its canonical SAN and the resulting position.
#[derive(Debug, Clone)]
pub struct AppliedMove<P> {
    pub intent: MoveIntent,
    pub san: String,
    pub position: P,
}

pub trait RulesEngine {
    type Position: Clone + fmt::Debug;

    /// Build a position from FEN.
    fn setup(&self, fen: &str) -> Result<Self::Position, PuzzleError>;

    fn legal_moves(&self, pos: &Self::Position) -> Vec<MoveIntent>;

    /// Play a user move. Fails if the move is not legal in `pos`.
    fn apply_move(
        &self,
        pos: &Self::Position,
        intent: &MoveIntent,
    ) -> Result<AppliedMove<Self::Position>, IllegalMove>;

    /// Play a move given in SAN (as found in PGN movetext).
    fn apply_san(
        &self,
        pos: &Self::Position,
        san: &str,
    ) -> Result<AppliedMove<Self::Position>, IllegalMove>;

    fn side_to_move(&self, pos: &Self::Position) -> Side;

    fn fen(&self, pos: &Self::Position) -> String;
}

/// Standard chess rules via shakmaty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shakmaty;

impl Shakmaty {
    fn illegal(&self, pos: &Chess, mv: impl ToString) -> IllegalMove {
        IllegalMove {
            mv: mv.to_string(),
            fen: self.fen(pos),
        }
    }

    fn play(pos: &Chess, mv: &Move) -> AppliedMove<Chess> {
        let mut next = pos.clone();
        let san = SanPlus::from_move_and_play_unchecked(&mut next, mv.clone());
        let uci = mv.to_uci(CastlingMode::Standard);
        let intent = MoveIntent::from_uci(&uci).unwrap_or(MoveIntent {
            from: mv.from().unwrap_or(mv.to()),
            to: mv.to(),
            promotion: mv.promotion(),
        });
        AppliedMove {
            intent,
            san: san.to_string(),
            position: next,
        }
    }
}

impl RulesEngine for Shakmaty {
    type Position = Chess;

    fn setup(&self, fen: &str) -> Result<Chess, PuzzleError> {
        let invalid = |reason: String| PuzzleError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen
            .parse()
            .map_err(|e: shakmaty::fen::ParseFenError| invalid(e.to_string()))?;
        parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| invalid(e.to_string()))
    }

    fn legal_moves(&self, pos: &Chess) -> Vec<MoveIntent> {
        pos.legal_moves()
            .iter()
            .filter_map(|mv| MoveIntent::from_uci(&mv.to_uci(CastlingMode::Standard)))
            .collect()
    }

    fn apply_move(
        &self,
        pos: &Chess,
        intent: &MoveIntent,
    ) -> Result<AppliedMove<Chess>, IllegalMove> {
        let mv = match intent.to_uci().to_move(pos) {
            Ok(mv) => mv,
            // Bare pawn moves to the last rank promote to a queen.
            Err(_) if intent.promotion.is_none() => intent
                .with_promotion(Role::Queen)
                .to_uci()
                .to_move(pos)
                .map_err(|_| self.illegal(pos, intent))?,
            Err(_) => return Err(self.illegal(pos, intent)),
        };
        Ok(Self::play(pos, &mv))
    }

    fn apply_san(&self, pos: &Chess, san: &str) -> Result<AppliedMove<Chess>, IllegalMove> {
        let stripped = san.trim_end_matches(['!', '?']);
        let parsed: SanPlus = stripped.parse().map_err(|_| self.illegal(pos, san))?;
        let mv = parsed.san.to_move(pos).map_err(|_| self.illegal(pos, san))?;
        Ok(Self::play(pos, &mv))
    }

    fn side_to_move(&self, pos: &Chess) -> Side {
        match pos.turn() {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    fn fen(&self, pos: &Chess) -> String {
        Fen::from_position(pos, EnPassantMode::Legal).to_string()
    }
}
