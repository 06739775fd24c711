// src/specs/book_chapter.rs
//! Book chapters: `authors, Chapter "…", for Book "…", ISBN: …, <i>publisher</i>, year.`
//! Same note/link tail as papers, plus an optional cover image.

use crate::config::consts::CHAPTER_IMAGE_CLASS;
use crate::core::sanitize::ensure_period;
use crate::fields::{non_empty, value_of};
use crate::records::Record;
use super::authors::Highlighter;
use super::cols;
use super::publications::{highlighted_authors, link_line, note_suffix};

pub fn compose_main_line(rec: &Record, hl: &Highlighter) -> String {
    let authors = highlighted_authors(rec, hl);
    let mut parts: Vec<String> = Vec::new();
    if !authors.is_empty() { parts.push(authors); }
    if let Some(ch) = non_empty(rec, cols::CHAPTER_TITLE) { parts.push(format!("Chapter \"{ch}\"")); }
    if let Some(book) = non_empty(rec, cols::BOOK_TITLE) { parts.push(format!("for Book \"{book}\"")); }
    if let Some(isbn) = non_empty(rec, cols::ISBN) { parts.push(format!("ISBN: {isbn}")); }
    if let Some(publ) = non_empty(rec, cols::PUBLISHER) { parts.push(format!("<i>{publ}</i>")); }
    let year = value_of(rec, cols::YEAR);
    if !year.is_empty() { parts.push(s!(year)); }

    ensure_period(parts.join(", "))
}

fn image_tail(rec: &Record) -> String {
    match non_empty(rec, cols::IMAGE) {
        Some(src) => format!("<br><br><img src=\"{src}\" width=\"20%\" class=\"{CHAPTER_IMAGE_CLASS}\">"),
        None => s!(),
    }
}

pub fn build_item(rec: &Record, hl: &Highlighter) -> String {
    li!(&compose_main_line(rec, hl), &note_suffix(rec), &link_line(rec), &image_tail(rec))
}

pub fn build_items(rows: &[Record], hl: &Highlighter) -> String {
    rows.iter()
        .map(|r| join!(&build_item(r, hl), "\n<br>"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_line_with_image() {
        let rec = Record::from_pairs([
            ("authors", "Yuchen Li, Bob Chen"),
            ("chapter_title", "Edge AI"),
            ("book_title", "Future Networks"),
            ("isbn", "978-1"),
            ("publisher", "Springer"),
            ("year", "2023"),
            ("pics", "img/book.png"),
        ]);
        let item = build_item(&rec, &Highlighter::default());
        assert_eq!(
            item,
            "<li><font class=\"deepblue\">Yuchen Li</font>, Bob Chen, Chapter \"Edge AI\", \
             for Book \"Future Networks\", ISBN: 978-1, <i>Springer</i>, 2023.\
             <br><br><img src=\"img/book.png\" width=\"20%\" \
             class=\"animate__animated animate__fadeIn animate__slow animate__delay-1s\"></li>"
        );
    }

    #[test]
    fn chapter_items_end_with_br() {
        let rows = vec![Record::from_pairs([("chapter", "C")])];
        assert_eq!(build_items(&rows, &Highlighter::default()), "<li>Chapter \"C\".</li>\n<br>");
    }
}
