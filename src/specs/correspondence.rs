// src/specs/correspondence.rs
//! Contact lines. Two sheet shapes are accepted:
//! - name/content pairs, one contact line per row;
//! - a single flat row with email, phone, office, address, homepage columns.

use crate::fields::{find_col, non_empty};
use crate::records::Record;
use super::cols;

fn entry(label: &str, value: &str) -> String {
    li!("<i>", label, "</i> :&nbsp;&nbsp; ", value)
}

pub fn build_items(rows: &[Record]) -> String {
    let Some(first) = rows.first() else {
        return s!();
    };
    let lines = match (find_col(first, cols::ENTRY_NAME), find_col(first, cols::ENTRY_CONTENT)) {
        (Some(name_key), Some(content_key)) => pair_lines(rows, name_key, content_key),
        _ => flat_lines(rows),
    };
    lines.join("\n")
}

fn pair_lines(rows: &[Record], name_key: &str, content_key: &str) -> Vec<String> {
    let mut out = Vec::new();
    for r in rows {
        let name = r.get(name_key).unwrap_or("");
        let content = r.get(content_key).unwrap_or("");
        if !name.is_empty() && !content.is_empty() {
            out.push(entry(name, content));
            out.push(s!("<br>"));
        }
    }
    out
}

fn flat_lines(rows: &[Record]) -> Vec<String> {
    let empty = Record::new();
    let row = rows.iter().find(|r| r.has_any_value()).unwrap_or(&empty);

    let mut out = Vec::new();
    for (label, cands) in [
        ("Email", cols::EMAIL),
        ("Phone", cols::PHONE),
        ("Office", cols::OFFICE),
        ("Address", cols::ADDRESS),
    ] {
        if let Some(v) = non_empty(row, cands) {
            out.push(entry(label, v));
            out.push(s!("<br>"));
        }
    }
    if let Some(url) = non_empty(row, cols::HOMEPAGE) {
        out.push(entry("Homepage", &format!("<a href='{url}' class=\"deepgrey\">{url}</a>")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_content_rows() {
        let rows = vec![
            Record::from_pairs([("name", "Email"), ("content", "a@b.c")]),
            Record::from_pairs([("name", "Fax"), ("content", "")]),
            Record::from_pairs([("name", "Office"), ("content", "Room 301")]),
        ];
        assert_eq!(
            build_items(&rows),
            "<li><i>Email</i> :&nbsp;&nbsp; a@b.c</li>\n<br>\n\
             <li><i>Office</i> :&nbsp;&nbsp; Room 301</li>\n<br>"
        );
    }

    #[test]
    fn flat_row_fixed_order_and_homepage_link() {
        let rows = vec![Record::from_pairs([
            ("homepage", "https://me.org"),
            ("address", "1 Main St"),
            ("email", "a@b.c"),
        ])];
        assert_eq!(
            build_items(&rows),
            "<li><i>Email</i> :&nbsp;&nbsp; a@b.c</li>\n<br>\n\
             <li><i>Address</i> :&nbsp;&nbsp; 1 Main St</li>\n<br>\n\
             <li><i>Homepage</i> :&nbsp;&nbsp; <a href='https://me.org' class=\"deepgrey\">https://me.org</a></li>"
        );
    }

    #[test]
    fn no_rows_no_lines() {
        assert_eq!(build_items(&[]), "");
    }
}
