//! Movetext cleanup: strips PGN noise ahead of variation parsing.
//!
//! Rules run in a fixed order; later rules rely on earlier ones having already
//! flattened newlines and dropped comments.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// One substitution in the normalization pipeline.
pub struct Rule {
    pub name: &'static str,
    pattern: &'static LazyLock<Regex>,
    replacement: &'static str,
}

impl Rule {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|\r").expect("valid regex"));
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("valid regex"));
static GLYPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\d+").expect("valid regex"));
static TERMINATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*").expect("valid regex"));
static BLACK_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*\.\.\.").expect("valid regex"));
static WHITE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*\.").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

pub static PIPELINE: [Rule; 7] = [
    Rule {
        name: "newlines",
        pattern: &NEWLINE_RE,
        replacement: " ",
    },
    Rule {
        name: "comments",
        pattern: &COMMENT_RE,
        replacement: "",
    },
    Rule {
        name: "annotation_glyphs",
        pattern: &GLYPH_RE,
        replacement: "",
    },
    Rule {
        name: "termination_marker",
        pattern: &TERMINATION_RE,
        replacement: "",
    },
    Rule {
        name: "black_move_numbers",
        pattern: &BLACK_NUMBER_RE,
        replacement: "",
    },
    Rule {
        name: "white_move_numbers",
        pattern: &WHITE_NUMBER_RE,
        replacement: "",
    },
    Rule {
        name: "whitespace",
        pattern: &WHITESPACE_RE,
        replacement: " ",
    },
];

fn run_pipeline(raw: &str) -> String {
    let mut text = raw.to_string();
    for rule in &PIPELINE {
        let replaced = match rule.apply(&text) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(replaced) => replaced,
        };
        text = replaced;
    }
    text.trim().to_string()
}

/// Normalize raw movetext: no comments, glyphs, move numbers or `*`, single spaces.
///
/// A removal can glue two fragments into a fresh match (`2 3..` loses `3.` and
/// leaves `2 .`), so the pipeline is re-run until the text stops changing. After
/// the first pass every change shortens the text, which bounds the loop.
pub fn normalize(raw: &str) -> String {
    let mut current = run_pipeline(raw);
    loop {
        let next = run_pipeline(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
