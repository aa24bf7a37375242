//! Days the user has solved. Storage is up to the caller; this only handles the
//! set and its JSON form (a list of dates).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ArchiveError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolvedHistory {
    days: BTreeSet<NaiveDate>,
}

impl SolvedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the day was already marked.
    pub fn mark_solved(&mut self, date: NaiveDate) -> bool {
        self.days.insert(date)
    }

    pub fn is_solved(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Accepts plain dates and full timestamps (`2024-03-09T00:00:00.000Z`);
    /// only the date part is kept. Unreadable items are skipped.
    pub fn from_json(json: &str) -> Result<Self, ArchiveError> {
        let items: Vec<String> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for item in &items {
            match item.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()) {
                Some(date) => {
                    history.mark_solved(date);
                }
                None => warn!(item = %item, "Ignoring unreadable solved day"),
            }
        }
        Ok(history)
    }

    pub fn to_json(&self) -> Result<String, ArchiveError> {
        Ok(serde_json::to_string(self)?)
    }
}
