//! PGN puzzle parsing: header tags plus main-line extraction from movetext.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::PuzzleError;
use crate::movetext;
use crate::record::{PuzzleRecord, Side, STANDARD_START_FEN};
use crate::variation;

const RESULT_MARKERS: [&str; 4] = ["*", "1-0", "0-1", "1/2-1/2"];

static HEADER_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[(\w+)\s+"((?:[^"\\]|\\.)*)"\]"#).expect("valid regex")
});

/// Parse a PGN puzzle record (header tags followed by movetext).
///
/// Movetext is whatever follows the closing bracket of the last header tag, so a
/// tag and the moves may share a line. Unrecognised fragments in the header block
/// are ignored. The only hard failure is a record with no movetext at all; the FEN
/// header is passed through unvalidated.
pub fn parse_record(pgn: &str) -> Result<PuzzleRecord, PuzzleError> {
    let mut headers = BTreeMap::new();
    let mut movetext_start = 0;
    for cap in HEADER_TAG_RE.captures_iter(pgn) {
        headers.insert(cap[1].to_lowercase(), cap[2].to_string());
        movetext_start = cap.get(0).map_or(movetext_start, |m| m.end());
    }

    let raw_movetext = pgn[movetext_start..]
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if raw_movetext.is_empty() {
        return Err(PuzzleError::MalformedRecord("no movetext found"));
    }

    let main_line = extract_main_line(&raw_movetext);

    let starting_fen = headers
        .get("fen")
        .cloned()
        .unwrap_or_else(|| STANDARD_START_FEN.to_string());
    let side_to_move = Side::from_fen(&starting_fen);
    let date = headers.get("date").and_then(|d| parse_header_date(d));
    let title = headers.get("event").filter(|e| !e.is_empty() && *e != "?").cloned();

    debug!(moves = main_line.len(), %side_to_move, "parsed puzzle record");

    Ok(PuzzleRecord {
        id: None,
        date,
        title,
        starting_fen,
        side_to_move,
        main_line,
        raw_movetext,
        headers,
    })
}

/// Normalize movetext and keep the main line, minus any result markers.
pub fn extract_main_line(raw_movetext: &str) -> Vec<String> {
    let normalized = movetext::normalize(raw_movetext);
    variation::main_line(&normalized)
        .into_iter()
        .filter(|token| !RESULT_MARKERS.contains(&token.as_str()))
        .collect()
}

/// PGN dates look like `2024.03.09`; unknown parts (`????.??.??`) yield None.
fn parse_header_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y.%m.%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAILY_PGN: &str = "[Event \"Fool's Mate Revisited\"]\r\n[Date \"2024.03.09\"]\r\n[Result \"*\"]\r\n[SetUp \"1\"]\r\n[FEN \"rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2\"]\r\n\r\n2...Qh4# *";

    #[test]
    fn test_parse_record_basic() {
        let record = parse_record(DAILY_PGN).unwrap();
        assert_eq!(record.main_line, vec!["Qh4#"]);
        assert_eq!(record.side_to_move, Side::Black);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(record.title.as_deref(), Some("Fool's Mate Revisited"));
        assert_eq!(record.header("SetUp"), Some("1"));
        assert_eq!(record.raw_movetext, "2...Qh4# *");
    }

    #[test]
    fn test_parse_record_without_headers() {
        let record = parse_record("1. e4 e5 2. Nf3 1-0").unwrap();
        assert_eq!(record.main_line, vec!["e4", "e5", "Nf3"]);
        assert_eq!(record.starting_fen, STANDARD_START_FEN);
        assert_eq!(record.side_to_move, Side::White);
        assert!(record.headers.is_empty());
    }

    #[test]
    fn test_parse_record_multiline_movetext() {
        let pgn = "[FEN \"8/8/8/8/8/8/8/8 w - - 0 1\"]\n\n1. e4 {note\nspanning lines} e5\n2. Nf3 (2. Nc3) Nc6 *\n";
        let record = parse_record(pgn).unwrap();
        assert_eq!(record.main_line, vec!["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn test_parse_record_missing_movetext() {
        let pgn = "[Event \"x\"]\n[FEN \"8/8/8/8/8/8/8/8 w - - 0 1\"]\n\n";
        assert_eq!(
            parse_record(pgn),
            Err(PuzzleError::MalformedRecord("no movetext found"))
        );
        assert!(parse_record("").is_err());
    }

    #[test]
    fn test_parse_record_ignores_junk_header_lines() {
        let pgn = "[Event \"x\"]\n[broken\n[Site \"y\"]\n1. d4 *";
        let record = parse_record(pgn).unwrap();
        assert_eq!(record.main_line, vec!["d4"]);
        assert_eq!(record.header("site"), Some("y"));
    }

    #[test]
    fn test_parse_record_movetext_on_header_line() {
        let pgn = "[Event \"x\"]\n[FEN \"rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2\"] 2...Qh4# *";
        let record = parse_record(pgn).unwrap();
        assert_eq!(record.main_line, vec!["Qh4#"]);
        assert_eq!(record.side_to_move, Side::Black);
        assert_eq!(
            record.starting_fen,
            "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2"
        );
        assert_eq!(record.raw_movetext, "2...Qh4# *");
    }

    #[test]
    fn test_parse_record_headers_on_one_line() {
        let record = parse_record("[Event \"Quiet\"] [Date \"2024.03.09\"] 1. d4 d5 *").unwrap();
        assert_eq!(record.title.as_deref(), Some("Quiet"));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(record.main_line, vec!["d4", "d5"]);
    }

    #[test]
    fn test_parse_record_noise_only_movetext() {
        let record = parse_record("[Event \"x\"]\n*").unwrap();
        assert!(record.main_line.is_empty());
    }

    #[test]
    fn test_extract_main_line_drops_result_markers() {
        assert_eq!(extract_main_line("1. e4 e5 1/2-1/2"), vec!["e4", "e5"]);
        assert_eq!(extract_main_line("1. e4 0-1"), vec!["e4"]);
    }
}
