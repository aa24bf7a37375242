#![allow(dead_code)]

use chrono::NaiveDate;
use puzzle_core::MoveIntent;
use serde_json::{json, Value};

/// White mates on f7 after the Scholar's setup.
pub const SCHOLARS_PGN: &str = "[Event \"Scholar's Finish\"]\r\n[Date \"2024.03.01\"]\r\n[Result \"*\"]\r\n[SetUp \"1\"]\r\n[FEN \"r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4\"]\r\n\r\n4. Qxf7# *";

/// Deflect the back-rank defender, with comments, glyphs and a side line.
pub const BACK_RANK_PGN: &str = "[Event \"Back Rank\"]\r\n[Date \"2024.03.02\"]\r\n[Result \"1-0\"]\r\n[SetUp \"1\"]\r\n[FEN \"3r2k1/5ppp/8/8/8/8/4QPPP/4R1K1 w - - 0 1\"]\r\n\r\n1. Qe8+ {Deflection!} (1. Qe7? h6) 1... Rxe8 $4 2. Rxe8# 1-0";

/// Black to move.
pub const FOOLS_MATE_PGN: &str = "[Event \"Fool's Mate\"]\r\n[Date \"2024.03.04\"]\r\n[Result \"*\"]\r\n[SetUp \"1\"]\r\n[FEN \"rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2\"]\r\n\r\n2...Qh4# *";

pub const PROMOTION_PGN: &str = "[FEN \"8/4P3/8/8/8/8/k7/7K w - - 0 1\"]\n\n1. e8=Q *";

pub const CASTLING_PGN: &str = "[FEN \"r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1\"]\n\n1. O-O O-O-O 2. Kh1 *";

pub const ALL_PGNS: [&str; 5] = [
    SCHOLARS_PGN,
    BACK_RANK_PGN,
    FOOLS_MATE_PGN,
    PROMOTION_PGN,
    CASTLING_PGN,
];

pub fn mv(uci: &str) -> MoveIntent {
    uci.parse().unwrap_or_else(|_| panic!("invalid UCI move: {uci}"))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A month of entries as the archive source delivers them, including one record
/// whose PGN has no movetext.
pub fn march_payload() -> Value {
    json!([
        { "id": 501, "title": "Scholar's Finish", "date": "2024-03-01", "pgn": SCHOLARS_PGN, "image": "a.png" },
        { "id": 502, "title": "Back Rank", "date": "2024-03-02", "pgn": BACK_RANK_PGN },
        { "id": 503, "title": "Empty", "date": "2024-03-03", "pgn": "[Event \"Empty\"]\r\n[Result \"*\"]" },
        { "id": 504, "title": null, "date": "2024-03-04", "pgn": FOOLS_MATE_PGN },
        { "id": 507, "title": "Promotion", "date": "2024-03-09", "pgn": PROMOTION_PGN }
    ])
}
