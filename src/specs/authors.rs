// src/specs/authors.rs
//! Author-list emphasis shared by every bibliographic formatter.

use regex::{Regex, RegexBuilder};

use crate::config::consts::{DEFAULT_HIGHLIGHT_PATTERN, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use crate::error::Result;

/// Wraps the page owner's name in an author list.
#[derive(Clone, Debug)]
pub struct Highlighter {
    pattern: Regex,
}

impl Default for Highlighter {
    fn default() -> Self {
        // The built-in pattern is a constant and known to compile.
        Self::new(DEFAULT_HIGHLIGHT_PATTERN).expect("default highlight pattern")
    }
}

impl Highlighter {
    /// Case-insensitive name pattern; every match gets wrapped.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    /// Emphasise the author at 1-based `position` when it is a usable index
    /// into the comma-separated list; otherwise emphasise every name-pattern
    /// match anywhere in `authors`.
    pub fn highlight(&self, authors: &str, position: Option<&str>) -> String {
        if authors.is_empty() {
            return s!();
        }
        if let Some(ix) = position.and_then(parse_position) {
            let tokens: Vec<&str> = authors.split(',').map(str::trim).collect();
            if ix <= tokens.len() {
                return tokens
                    .iter()
                    .enumerate()
                    .map(|(i, tok)| if i + 1 == ix { emphasise(tok) } else { s!(*tok) })
                    .collect::<Vec<_>>()
                    .join(", ");
            }
        }
        self.highlight_globally(authors)
    }

    pub fn highlight_globally(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &regex::Captures| emphasise(&caps[0]))
            .into_owned()
    }
}

fn emphasise(tok: &str) -> String {
    join!(HIGHLIGHT_OPEN, tok, HIGHLIGHT_CLOSE)
}

/// 1-based author position; anything non-numeric or below 1 is no position.
fn parse_position(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&n| n >= 1)
}
