// src/specs/mod.rs
//! # Content formatters
//!
//! One module per content category. Each turns the records of one worksheet
//! into the HTML fragment that replaces the matching section of the page.
//!
//! ## What lives here
//! - **Pure formatting**: `&[Record]` in, `String` out. No I/O, no document
//!   access, no shared state.
//! - **Column tolerance**: every field is looked up through
//!   `fields::find_col` with the spellings in [`cols`], so renamed or
//!   bilingual headers keep working and missing columns just drop that part
//!   of the line.
//!
//! ## What does **not** live here
//! - Deciding which sheet maps to which section (`section`).
//! - Splicing fragments into the page (`patch`).
//!
//! ## Shapes
//! - `news`, `patents`, `awards`, `correspondence`: `<li>` lines joined by
//!   newlines, each followed by a `<br>` line.
//! - `publications`, `book_chapter`: `<li>` items ending in `\n<br>`,
//!   separated by a blank line.
//! - `text_block`: a single line of text.
//! - `profile`: literal replacement values, not a fragment.

pub mod authors;
pub mod awards;
pub mod book_chapter;
pub mod cols;
pub mod correspondence;
pub mod news;
pub mod patents;
pub mod profile;
pub mod publications;
pub mod text_block;

use crate::config::consts::VISIBLE_TOKENS;
use crate::fields::find_col;
use crate::records::Record;

/// Records are shown unless a visibility column holds something other than
/// an accepted "yes" token. An empty visibility cell counts as shown.
pub fn is_visible(rec: &Record) -> bool {
    let Some(key) = find_col(rec, cols::VISIBLE) else {
        return true;
    };
    let raw = rec.get(key).unwrap_or("").trim();
    raw.is_empty() || VISIBLE_TOKENS.contains(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_tokens() {
        for tok in ["1", "true", "True", "是", "yes", "Yes", ""] {
            assert!(is_visible(&Record::from_pairs([("visible", tok)])), "{tok:?}");
        }
        for tok in ["0", "false", "TRUE", "否", "no"] {
            assert!(!is_visible(&Record::from_pairs([("visible", tok)])), "{tok:?}");
        }
        assert!(is_visible(&Record::from_pairs([("title", "x")])));
    }
}
