//! Integration tests: archive index, calendar navigation and solved history.

use puzzle_archive::{replay_all, ArchiveError, PuzzleArchiveIndex, SolvedHistory};
use puzzle_core::{Direction, MoveOutcome, PuzzleError};

mod common;
use common::{date, mv};

fn march() -> PuzzleArchiveIndex {
    PuzzleArchiveIndex::from_json(&common::march_payload().to_string()).unwrap()
}

#[test]
fn test_month_payload_skips_malformed_record() {
    let index = march();
    assert_eq!(index.len(), 4);
    assert_eq!(index.rejected().len(), 1);

    let rejected = &index.rejected()[0];
    assert_eq!(rejected.id, 503);
    assert_eq!(rejected.date, date(2024, 3, 3));
    assert!(matches!(rejected.error, PuzzleError::MalformedRecord(_)));
}

#[test]
fn test_entry_metadata_overrides_headers() {
    let index = march();
    let record = index.get(date(2024, 3, 4)).unwrap();
    assert_eq!(record.id, Some(504));
    assert_eq!(record.date, Some(date(2024, 3, 4)));
    // No title in the entry: the Event header is used.
    assert_eq!(record.display_title(), "Fool's Mate");
}

#[test]
fn test_navigation_skips_missing_days() {
    let index = march();
    assert_eq!(index.navigate(date(2024, 3, 2), Direction::Forward), date(2024, 3, 4));
    assert_eq!(index.navigate(date(2024, 3, 4), Direction::Backward), date(2024, 3, 2));
    assert_eq!(index.navigate(date(2024, 3, 4), Direction::Forward), date(2024, 3, 9));

    // Nothing after the last puzzle: the scan gives up 366 days later.
    let fallback = index.navigate(date(2024, 3, 9), Direction::Forward);
    assert_eq!(fallback, date(2025, 3, 10));
}

#[test]
fn test_disabled_days_cover_gaps_and_tail() {
    let index = march();
    let disabled = index.disabled_days(2024, 3);
    assert!(disabled.contains(&date(2024, 3, 3)));
    assert!(disabled.contains(&date(2024, 3, 31)));
    assert!(!disabled.contains(&date(2024, 3, 9)));
    assert_eq!(disabled.len(), 31 - 4);
}

#[test]
fn test_solve_and_record_history() {
    let index = march();
    let day = date(2024, 3, 1);
    let mut session = index.open_session(day).unwrap();
    let mut history = SolvedHistory::new();

    assert_eq!(session.submit_move(mv("h5h7")), MoveOutcome::WrongSolution { san: "Qxh7".into() });
    let outcome = session.submit_move(mv("h5f7"));
    assert_eq!(outcome, MoveOutcome::Correct { san: "Qxf7#".into(), reply: None });
    if session.is_solved() {
        history.mark_solved(day);
    }

    let restored = SolvedHistory::from_json(&history.to_json().unwrap()).unwrap();
    assert!(restored.is_solved(day));
    assert!(!restored.is_solved(date(2024, 3, 2)));
}

#[test]
fn test_open_session_on_missing_day() {
    let index = march();
    assert!(matches!(
        index.open_session(date(2024, 3, 3)),
        Err(ArchiveError::NoPuzzle(_))
    ));
}

#[test]
fn test_whole_month_replays() {
    let report = replay_all(&march());
    assert!(report.is_clean(), "{:?}", report.failures);
    assert_eq!(report.solved, 4);
}

#[test]
fn test_merging_months() {
    let mut index = march();
    let april = serde_json::json!([
        { "id": 530, "title": "April", "date": "2024-04-01", "pgn": common::CASTLING_PGN }
    ]);
    index.extend(PuzzleArchiveIndex::from_json(&april.to_string()).unwrap());
    assert_eq!(index.len(), 5);
    assert_eq!(index.navigate(date(2024, 3, 9), Direction::Forward), date(2024, 4, 1));
    assert_eq!(index.last_date(), Some(date(2024, 4, 1)));
}
