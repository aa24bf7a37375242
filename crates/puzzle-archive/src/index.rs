//! Date-keyed index over parsed daily puzzles.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use puzzle_core::{CalendarNavigator, Direction, PuzzleError, PuzzleRecord, SolvingSession};

use crate::entry::DailyPuzzleEntry;
use crate::error::ArchiveError;

/// An entry whose PGN could not be parsed. Kept for reporting; never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub error: PuzzleError,
}

#[derive(Debug, Clone, Default)]
pub struct PuzzleArchiveIndex {
    records: BTreeMap<NaiveDate, PuzzleRecord>,
    rejected: Vec<RejectedEntry>,
    navigator: CalendarNavigator,
}

impl PuzzleArchiveIndex {
    /// Parse every entry, skipping (and recording) the ones that fail.
    /// Entries are taken in id order, so the highest id wins a shared date.
    pub fn from_entries(entries: impl IntoIterator<Item = DailyPuzzleEntry>) -> Self {
        let mut entries: Vec<DailyPuzzleEntry> = entries.into_iter().collect();
        entries.sort_by_key(|e| e.id);

        let mut index = Self::default();
        for entry in &entries {
            match entry.to_record() {
                Ok(record) => {
                    index.records.insert(entry.date, record);
                }
                Err(error) => {
                    warn!(id = entry.id, date = %entry.date, %error, "Skipping malformed puzzle");
                    index.rejected.push(RejectedEntry {
                        id: entry.id,
                        date: entry.date,
                        error,
                    });
                }
            }
        }

        debug!(
            records = index.records.len(),
            rejected = index.rejected.len(),
            "Built puzzle index"
        );
        index
    }

    /// Index a JSON array of entries (one month or the full archive).
    pub fn from_json(json: &str) -> Result<Self, ArchiveError> {
        let entries: Vec<DailyPuzzleEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn load(path: &Path) -> Result<Self, ArchiveError> {
        let json = std::fs::read_to_string(path).map_err(|source| ArchiveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with_navigator(mut self, navigator: CalendarNavigator) -> Self {
        self.navigator = navigator;
        self
    }

    /// Merge another index into this one. On a shared date the higher id wins.
    pub fn extend(&mut self, other: PuzzleArchiveIndex) {
        for (date, record) in other.records {
            match self.records.get(&date) {
                Some(existing) if existing.id > record.id => {}
                _ => {
                    self.records.insert(date, record);
                }
            }
        }
        self.rejected.extend(other.rejected);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&PuzzleRecord> {
        self.records.get(&date)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rejected(&self) -> &[RejectedEntry] {
        &self.rejected
    }

    /// Records in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &PuzzleRecord)> {
        self.records.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records.keys().copied()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.keys().next_back().copied()
    }

    pub fn is_unavailable(&self, date: NaiveDate) -> bool {
        !self.records.contains_key(&date)
    }

    /// Days of the given month that have no puzzle.
    pub fn disabled_days(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .filter(|d| self.is_unavailable(*d))
            .collect()
    }

    /// Nearest date with a puzzle strictly before/after `from`.
    pub fn navigate(&self, from: NaiveDate, direction: Direction) -> NaiveDate {
        self.navigator
            .next_available(from, direction, |d| self.is_unavailable(d))
    }

    /// Start a fresh solving session for the puzzle on `date`.
    pub fn open_session(&self, date: NaiveDate) -> Result<SolvingSession, ArchiveError> {
        let record = self.get(date).ok_or(ArchiveError::NoPuzzle(date))?;
        Ok(SolvingSession::standard(record)?)
    }
}
