//! Configuration from environment variables

use std::env;
use std::path::PathBuf;

use puzzle_core::{CalendarNavigator, MAX_SCAN_DAYS};

#[derive(Clone, Debug)]
pub struct ArchiveConfig {
    /// Archive JSON files to load (`PUZZLE_ARCHIVE_PATH`, path-list syntax)
    pub archive_paths: Vec<PathBuf>,

    /// Days examined per calendar lookup before falling back
    pub scan_limit: u32,
}

impl ArchiveConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            archive_paths: lookup("PUZZLE_ARCHIVE_PATH")
                .map(|v| env::split_paths(&v).collect())
                .unwrap_or_default(),
            scan_limit: lookup("CALENDAR_SCAN_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_SCAN_DAYS),
        }
    }

    pub fn navigator(&self) -> CalendarNavigator {
        CalendarNavigator::new(self.scan_limit)
    }
}
