// src/specs/news.rs
//! News lines: `<li><i>date</i> : text</li>` (or just the text), each
//! followed by a `<br>` line.

use crate::fields::non_empty;
use crate::records::Record;
use super::cols;

/// One way of finding a news line's text; `None` hands over to the next.
pub type TextStrategy = fn(&Record) -> Option<String>;

/// Tried in order: a designated text column, then every non-empty value.
pub const TEXT_STRATEGIES: &[TextStrategy] = &[designated_text, joined_values];

pub fn designated_text(rec: &Record) -> Option<String> {
    non_empty(rec, cols::NEWS_TEXT).map(String::from)
}

pub fn joined_values(rec: &Record) -> Option<String> {
    let joined = rec.non_empty_values().collect::<Vec<_>>().join(", ");
    Some(joined).filter(|s| !s.is_empty())
}

pub fn news_text(rec: &Record) -> String {
    TEXT_STRATEGIES.iter().find_map(|f| f(rec)).unwrap_or_default()
}

pub fn build_line(rec: &Record) -> String {
    let text = news_text(rec);
    match non_empty(rec, cols::NEWS_DATE) {
        Some(date) => li!("<i>", date, "</i> : ", &text),
        None => li!(&text),
    }
}

pub fn build_items(rows: &[Record]) -> String {
    rows.iter()
        .flat_map(|r| [build_line(r), s!("<br>")])
        .collect::<Vec<_>>()
        .join("\n")
}
