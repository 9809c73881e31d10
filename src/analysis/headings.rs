// src/analysis/headings.rs
//! Line classifier for markdown cell text.
//!
//! A line is a heading when it starts with a run of `#` characters, followed
//! by at least one whitespace character, followed by at least one more
//! character. The heading level is the length of the `#` run. Every other
//! line is body text.

use regex::Regex;

lazy_static::lazy_static! {
    static ref HEADING_LINE: Regex =
        Regex::new(r"^(#+)\s+(.+)$").expect("heading pattern is valid");
}

/// What a single line of markdown is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: usize, text: &'a str },
    Body,
}

impl LineKind<'_> {
    pub fn is_heading(&self) -> bool {
        matches!(self, LineKind::Heading { .. })
    }
}

/// Classifies one line (without its trailing newline).
pub fn classify_line(line: &str) -> LineKind<'_> {
    match HEADING_LINE.captures(line) {
        Some(caps) => {
            let level = caps.get(1).map_or(0, |m| m.as_str().len());
            let text = caps.get(2).map_or("", |m| m.as_str().trim());
            LineKind::Heading { level, text }
        }
        None => LineKind::Body,
    }
}

/// Headings of `text` in line order, as `(level, trimmed text)` pairs.
pub fn headings(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').filter_map(|line| match classify_line(line) {
        LineKind::Heading { level, text } => Some((level, text)),
        LineKind::Body => None,
    })
}
