// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

/// Leading list numbering such as "1. ", "2) ", "3, " or "4、".
static RE_LEADING_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*([,.)、]\s*)?").expect("leading index regex"));

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Worksheet titles compare on lowercased, whitespace-collapsed text.
pub fn normalize_title(title: &str) -> String {
    normalize_ws(&title.to_lowercase())
}

pub fn strip_leading_index(text: &str) -> String {
    RE_LEADING_INDEX.replace(text, "").into_owned()
}

/// Append a period unless the text is empty or already ends with one.
pub fn ensure_period(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('.') {
        text.push('.');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_normalization_folds_case_and_space() {
        assert_eq!(normalize_title("  Refereed   Journal\tPapers "), "refereed journal papers");
        assert_eq!(normalize_title("最新动态"), "最新动态");
    }

    #[test]
    fn leading_index_variants() {
        assert_eq!(strip_leading_index("1. Smart lock"), "Smart lock");
        assert_eq!(strip_leading_index("  2) Smart lock"), "Smart lock");
        assert_eq!(strip_leading_index("3、一种方法"), "一种方法");
        assert_eq!(strip_leading_index("2023, Best Paper"), "Best Paper");
        assert_eq!(strip_leading_index("Best Paper 2023"), "Best Paper 2023");
    }

    #[test]
    fn period_is_not_doubled() {
        assert_eq!(ensure_period(s!("A, B")), "A, B.");
        assert_eq!(ensure_period(s!("A, B.")), "A, B.");
        assert_eq!(ensure_period(s!()), "");
    }
}
