// src/specs/patents.rs
//! Patents: title (index stripped) followed by every other non-empty
//! column, then the filing state as a coloured bold parenthetical.

use crate::core::sanitize::strip_leading_index;
use crate::fields::{find_col, value_of};
use crate::records::Record;
use super::{cols, is_visible};

/// Control columns never printed in the body of a patent line.
const CONTROL_COLUMNS: &[&str] = &["note", "备注", "author_order", "作者序", "作者次序", "次序"];

/// CSS class for a patent state: "公开" (published) is blue, "授权"
/// (granted) red, anything else blue.
pub fn state_class(state: &str) -> &'static str {
    if state.contains("公开") {
        "blue"
    } else if state.contains("授权") {
        "red"
    } else {
        "blue"
    }
}

pub fn state_suffix(state: &str) -> String {
    if state.is_empty() {
        return s!();
    }
    format!(" <font class=\"{}\"><b>({state})</b></font>", state_class(state))
}

/// Comma-joined body: stripped title first, then the remaining columns.
fn body(rec: &Record) -> String {
    let resolved = |cands: &[&str]| find_col(rec, cands).map(str::to_lowercase).unwrap_or_default();
    let title_key = resolved(cols::PATENT_TITLE);
    let mut skip: Vec<String> = vec![
        s!(),
        resolved(cols::INDEX),
        resolved(cols::STATE),
        resolved(cols::VISIBLE),
        title_key.clone(),
        resolved(cols::AUTHORS),
    ];
    skip.extend(CONTROL_COLUMNS.iter().map(|c| s!(*c)));

    let mut parts: Vec<String> = Vec::new();
    let title = value_of(rec, cols::PATENT_TITLE);
    if !title.is_empty() {
        parts.push(strip_leading_index(title));
    }
    for (name, value) in rec.iter() {
        if value.is_empty() || skip.contains(&name.to_lowercase()) {
            continue;
        }
        parts.push(s!(value));
    }
    parts.join(", ")
}

/// `<li>…</li>` for a visible patent with any text, else `None`.
pub fn build_line(rec: &Record) -> Option<String> {
    if !is_visible(rec) {
        return None;
    }
    let text = body(rec);
    if text.is_empty() {
        return None;
    }
    Some(li!(&text, &state_suffix(value_of(rec, cols::STATE))))
}

pub fn build_items(rows: &[Record]) -> String {
    rows.iter()
        .filter_map(build_line)
        .flat_map(|line| [line, s!("<br>")])
        .collect::<Vec<_>>()
        .join("\n")
}
