//! Daily chess puzzle core: PGN main-line extraction and the solving session.

pub mod calendar;
pub mod error;
pub mod movetext;
pub mod pgn;
pub mod record;
pub mod rules;
pub mod session;
pub mod variation;

pub use calendar::{CalendarNavigator, Direction, MAX_SCAN_DAYS};
pub use error::{IllegalMove, PuzzleError, SessionError};
pub use pgn::parse_record;
pub use record::{PuzzleRecord, Side, STANDARD_START_FEN};
pub use rules::{AppliedMove, MoveIntent, RulesEngine, Shakmaty};
pub use session::{HintPolicy, MoveOutcome, Mover, PlayedMove, SessionStatus, SolvingSession};
