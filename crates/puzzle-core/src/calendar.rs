//! Stepping through the puzzle calendar while skipping days without a puzzle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound on days examined by one lookup.
pub const MAX_SCAN_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Direction::Forward => date.succ_opt(),
            Direction::Backward => date.pred_opt(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarNavigator {
    pub scan_limit: u32,
}

impl Default for CalendarNavigator {
    fn default() -> Self {
        Self { scan_limit: MAX_SCAN_DAYS }
    }
}

impl CalendarNavigator {
    pub fn new(scan_limit: u32) -> Self {
        Self { scan_limit: scan_limit.max(1) }
    }

    /// Nearest available date strictly before/after `from`.
    ///
    /// `from` itself is never returned. Once `scan_limit` days have been examined
    /// the last date reached is returned whether or not it is available.
    pub fn next_available<F>(
        &self,
        from: NaiveDate,
        direction: Direction,
        is_unavailable: F,
    ) -> NaiveDate
    where
        F: Fn(NaiveDate) -> bool,
    {
        let mut candidate = from;
        for _ in 0..self.scan_limit.max(1) {
            candidate = match direction.step(candidate) {
                Some(next) => next,
                // Ran off the end of the representable calendar.
                None => return candidate,
            };
            if !is_unavailable(candidate) {
                return candidate;
            }
        }
        candidate
    }
}

/// [`CalendarNavigator::next_available`] with the default scan limit.
pub fn next_available<F>(from: NaiveDate, direction: Direction, is_unavailable: F) -> NaiveDate
where
    F: Fn(NaiveDate) -> bool,
{
    CalendarNavigator::default().next_available(from, direction, is_unavailable)
}
