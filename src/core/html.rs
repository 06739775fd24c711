// src/core/html.rs
// Low-level HTML string helpers for patching hand-written pages.
// Tags are located by name only (case-insensitive) and never parsed;
// bytes outside the located span stay untouched.

use regex::{Regex, RegexBuilder};

use crate::config::consts::{ANCHOR_PREFIX, ANCHOR_SUFFIX};

/// Literal marker that precedes a patchable section: `<div id="News"></div>`.
pub fn anchor_marker(section_id: &str) -> String {
    join!(ANCHOR_PREFIX, section_id, ANCHOR_SUFFIX)
}

/// Byte offset of the section's anchor marker.
pub fn find_anchor(s: &str, section_id: &str) -> Option<usize> {
    s.find(&anchor_marker(section_id))
}

fn tag_regex(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

/// Next opening tag `<tag …>` at or after `from`, any attributes.
/// Returns `(start, end)` where `end` is just past the `>`.
pub fn find_open_tag_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let re = tag_regex(&format!(r"<\s*{}([^>]*)>", regex::escape(tag)))?;
    let m = re.find_at(s, from)?;
    Some((m.start(), m.end()))
}

/// Next closing tag `</tag>` at or after `from`.
pub fn find_close_tag_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let re = tag_regex(&format!(r"</\s*{}\s*>", regex::escape(tag)))?;
    let m = re.find_at(s, from)?;
    Some((m.start(), m.end()))
}

/// Inner span of the first `<tag>…</tag>` pair at or after `from`:
/// `(open_end, close_start)`, i.e. the bytes strictly between the two tags.
pub fn next_inner_span_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let (_, open_end) = find_open_tag_ci(s, tag, from)?;
    let (close_start, _) = find_close_tag_ci(s, tag, open_end)?;
    Some((open_end, close_start))
}

/// Indentation of the first line inside `inner` that starts with
/// whitespace followed by content.
pub fn leading_indent(inner: &str) -> Option<&str> {
    let mut rest = inner;
    while let Some(nl) = rest.find('\n') {
        rest = &rest[nl + 1..];
        let ws_len = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        if ws_len == 0 {
            continue;
        }
        match rest[ws_len..].chars().next() {
            Some(c) if !c.is_whitespace() => return Some(&rest[..ws_len]),
            _ => continue,
        }
    }
    None
}
