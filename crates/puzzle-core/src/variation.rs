//! Recursive resolution of parenthesised variations in normalized movetext.
//!
//! `extract_lines` returns every candidate sequence. Each `(` branches every
//! sequence built so far with every sequence of the enclosed variation, and the
//! branches are kept next to the originals. The first sequence never takes a
//! branch, which makes it the main line.
//!
//! Parentheses are handled leniently: an unclosed `(` runs to the end of input and a
//! `)` with no open variation is skipped.

/// A flat sequence of move tokens.
pub type Line = Vec<String>;

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Longest run of characters that are neither whitespace nor parentheses.
    fn take_token(&mut self) -> &'a str {
        let rest = &self.text[self.pos..];
        let len = rest
            .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

fn parse_level(cursor: &mut Cursor<'_>, depth: usize) -> Vec<Line> {
    let mut stack: Vec<Line> = vec![Vec::new()];

    while let Some(c) = cursor.peek() {
        match c {
            '(' => {
                cursor.bump(c);
                let variations = parse_level(cursor, depth + 1);

                let mut branched = Vec::with_capacity(stack.len() * variations.len());
                for seq in &stack {
                    for variation in &variations {
                        let mut combined = seq.clone();
                        combined.extend(variation.iter().cloned());
                        branched.push(combined);
                    }
                }
                stack.extend(branched);
            }
            ')' => {
                cursor.bump(c);
                if depth > 0 {
                    return stack;
                }
            }
            c if c.is_whitespace() => cursor.bump(c),
            _ => {
                let token = cursor.take_token();
                for seq in &mut stack {
                    seq.push(token.to_string());
                }
            }
        }
    }

    stack
}

/// All candidate sequences; the first is the main line.
///
/// The number of sequences grows multiplicatively with the number of variations.
/// Callers that only need the main line should use [`main_line`].
pub fn extract_lines(normalized: &str) -> Vec<Line> {
    let mut cursor = Cursor::new(normalized);
    parse_level(&mut cursor, 0)
}

/// The main line of normalized movetext: tokens outside any variation, in order.
///
/// Produces the same sequence as `extract_lines(normalized)[0]` without building
/// the branches.
pub fn main_line(normalized: &str) -> Line {
    let mut cursor = Cursor::new(normalized);
    let mut depth = 0usize;
    let mut line = Vec::new();

    while let Some(c) = cursor.peek() {
        match c {
            '(' => {
                cursor.bump(c);
                depth += 1;
            }
            ')' => {
                cursor.bump(c);
                depth = depth.saturating_sub(1);
            }
            c if c.is_whitespace() => cursor.bump(c),
            _ => {
                let token = cursor.take_token();
                if depth == 0 {
                    line.push(token.to_string());
                }
            }
        }
    }

    line
}
