//! Archive error types

use std::path::PathBuf;

use chrono::NaiveDate;
use puzzle_core::PuzzleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No puzzle for {0}")]
    NoPuzzle(NaiveDate),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
