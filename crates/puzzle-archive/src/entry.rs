use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use puzzle_core::{parse_record, PuzzleError, PuzzleRecord};

/// One daily puzzle as delivered by the archive source.
/// Extra fields in the payload (images, pre-parsed data) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzleEntry {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub pgn: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl DailyPuzzleEntry {
    /// Parse the PGN, then take id, date and title from the entry itself.
    pub fn to_record(&self) -> Result<PuzzleRecord, PuzzleError> {
        let record = parse_record(&self.pgn)?.with_id(self.id).with_date(self.date);
        Ok(match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => record.with_title(title),
            _ => record,
        })
    }
}
