// src/specs/awards.rs
//! Awards: `<year or time>, <text> <font class="red">(note)</font>`.

use crate::core::sanitize::strip_leading_index;
use crate::fields::{find_col, non_empty};
use crate::records::Record;
use super::{cols, is_visible};

pub fn build_line(rec: &Record) -> Option<String> {
    if !is_visible(rec) {
        return None;
    }
    let resolved = |cands: &[&str]| find_col(rec, cands).map(str::to_lowercase).unwrap_or_default();
    let skip = [s!(), resolved(cols::INDEX), resolved(cols::VISIBLE), resolved(cols::NOTE)];

    let joined = rec
        .iter()
        .filter(|(name, value)| !value.is_empty() && !skip.contains(&name.to_lowercase()))
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(", ");
    let mut text = strip_leading_index(&joined);

    if let Some(prefix) = non_empty(rec, cols::TIME).or_else(|| non_empty(rec, cols::YEAR)) {
        text = format!("{prefix}, {text}");
    }
    if text.is_empty() {
        return None;
    }

    let note = non_empty(rec, cols::NOTE)
        .map(|n| format!(" <font class=\"red\">({n})</font>"))
        .unwrap_or_default();
    Some(li!(&text, &note))
}

pub fn build_items(rows: &[Record]) -> String {
    rows.iter()
        .filter_map(build_line)
        .flat_map(|line| [line, s!("<br>")])
        .collect::<Vec<_>>()
        .join("\n")
}
