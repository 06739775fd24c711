// src/specs/publications.rs
//! Journal papers, conference papers and featured articles.
//!
//! One `<li>` per record:
//! `authors, "title", <i>container</i>, pages, time, doi: …` plus an optional
//! red note and a link line. Each item is followed by its own `<br>` line and
//! items are separated by a blank line.

use crate::fields::{non_empty, value_of};
use crate::records::Record;
use crate::core::sanitize::ensure_period;
use super::authors::Highlighter;
use super::cols;

/// The bibliographic sentence for one record, period-terminated.
pub fn compose_main_line(rec: &Record, hl: &Highlighter) -> String {
    let authors = highlighted_authors(rec, hl);
    let title = value_of(rec, cols::TITLE);
    let container = value_of(rec, cols::CONTAINER);
    let pages = value_of(rec, cols::PAGES);
    let time = publication_time(rec);
    let doi = value_of(rec, cols::DOI);

    let mut parts: Vec<String> = Vec::new();
    if !authors.is_empty() { parts.push(authors); }
    if !title.is_empty() { parts.push(format!("\"{title}\"")); }
    if !container.is_empty() { parts.push(format!("<i>{container}</i>")); }
    if !pages.is_empty() { parts.push(s!(pages)); }
    if !time.is_empty() { parts.push(time); }
    if !doi.is_empty() { parts.push(format!("doi: {doi}")); }

    ensure_period(parts.join(", ").trim().to_string())
}

/// Author list with the page owner emphasised.
pub fn highlighted_authors(rec: &Record, hl: &Highlighter) -> String {
    let raw = value_of(rec, cols::AUTHORS);
    hl.highlight(raw, non_empty(rec, cols::AUTHOR_ORDER))
}

/// Explicit time column, else "month, year" with blanks left out.
fn publication_time(rec: &Record) -> String {
    if let Some(t) = non_empty(rec, cols::TIME) {
        return s!(t);
    }
    [value_of(rec, cols::MONTH), value_of(rec, cols::YEAR)]
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// ` <font class="red">(note)</font>`, the note itself linked when a note link exists.
pub fn note_suffix(rec: &Record) -> String {
    let Some(note) = non_empty(rec, cols::NOTE) else {
        return s!();
    };
    match non_empty(rec, cols::NOTE_LINK) {
        Some(href) => format!(" <font class=\"red\">(<a href='{href}' class=\"red\">{note}</a>)</font>"),
        None => format!(" <font class=\"red\">({note})</font>"),
    }
}

/// `<br><a …>url</a>` from the link column, else from the DOI.
pub fn link_line(rec: &Record) -> String {
    let url = match (non_empty(rec, cols::LINK), non_empty(rec, cols::DOI)) {
        (Some(link), _) => s!(link),
        (None, Some(doi)) => format!("https://doi.org/{doi}"),
        (None, None) => return s!(),
    };
    format!("<br><a href='{url}' class=\"deepgrey\">{url}</a>")
}

pub fn build_item(rec: &Record, hl: &Highlighter) -> String {
    li!(&compose_main_line(rec, hl), &note_suffix(rec), &link_line(rec))
}

/// Items with a trailing `<br>` each, separated by blank lines.
pub fn build_items(rows: &[Record], hl: &Highlighter) -> String {
    rows.iter()
        .map(|r| join!(&build_item(r, hl), "\n<br>"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
