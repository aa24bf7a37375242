use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Side to move according to the second FEN field. Anything but `b` is White.
    pub fn from_fen(fen: &str) -> Self {
        match fen.split_whitespace().nth(1) {
            Some("b") => Side::Black,
            _ => Side::White,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// A parsed puzzle: starting position plus the prescribed main line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub starting_fen: String,
    pub side_to_move: Side,
    pub main_line: Vec<String>, // SAN notation
    pub raw_movetext: String,
    pub headers: BTreeMap<String, String>,
}

impl PuzzleRecord {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Display title, falling back to "untitled".
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("untitled")
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(&key.to_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_fen() {
        assert_eq!(Side::from_fen(STANDARD_START_FEN), Side::White);
        assert_eq!(
            Side::from_fen("6k1/5ppp/8/8/8/8/5PPP/3R2K1 b - - 0 1"),
            Side::Black
        );
        assert_eq!(Side::from_fen("garbage"), Side::White);
        assert_eq!(Side::Black.to_string(), "Black");
        assert_eq!(Side::White.other(), Side::Black);
    }

    #[test]
    fn test_side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Black).unwrap(), "\"black\"");
        let side: Side = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(side, Side::White);
    }
}
