//! Consumer side of the daily puzzle archive: raw entries, the date index,
//! solved-day history and bulk replay checks.

pub mod config;
pub mod entry;
pub mod error;
pub mod history;
pub mod index;
pub mod verify;

pub use config::ArchiveConfig;
pub use entry::DailyPuzzleEntry;
pub use error::ArchiveError;
pub use history::SolvedHistory;
pub use index::{PuzzleArchiveIndex, RejectedEntry};
pub use verify::{replay_all, replay_record, VerifyReport};
