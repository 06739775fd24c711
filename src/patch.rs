// src/patch.rs
//! Anchor-based HTML patching.
//!
//! A section is found by its literal anchor `<div id="Name"></div>`; the
//! first `<tag>` after it (and the next `</tag>`) delimit what gets
//! replaced. Everything outside that span is copied byte for byte. A missing
//! anchor or tag leaves the text unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::consts::DEFAULT_INDENT;
use crate::core::html::{find_anchor, leading_indent, next_inner_span_ci};
use crate::specs::profile::ProfileUpdate;

/// One pending change to the page, produced from one worksheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Replace a list's items.
    List { anchor: String, tag: String, inner: String },
    /// Replace an element's text with a single line.
    Text { anchor: String, tag: String, text: String },
    /// Swap header values in place.
    Profile(ProfileUpdate),
}

impl Patch {
    pub fn list(anchor: &str, tag: &str, inner: String) -> Self {
        Patch::List { anchor: s!(anchor), tag: s!(tag), inner }
    }

    pub fn text(anchor: &str, tag: &str, text: String) -> Self {
        Patch::Text { anchor: s!(anchor), tag: s!(tag), text }
    }

    /// Human label of the patched section.
    pub fn section(&self) -> &str {
        match self {
            Patch::List { anchor, .. } | Patch::Text { anchor, .. } => anchor,
            Patch::Profile(_) => "Header",
        }
    }

    /// Patched text, or `None` when the patch found nothing to change.
    pub fn try_apply(&self, html: &str) -> Option<String> {
        match self {
            Patch::List { anchor, tag, inner } => try_replace_section_list(html, anchor, tag, inner),
            Patch::Text { anchor, tag, text } => try_replace_text_after_section(html, anchor, tag, text),
            Patch::Profile(update) => try_apply_profile(html, update),
        }
    }

    /// Patched text; the input unchanged when the target is missing.
    pub fn apply(&self, html: &str) -> String {
        self.try_apply(html).unwrap_or_else(|| s!(html))
    }
}

/// Apply patches in order, each one seeing the result of the previous.
pub fn apply_all(html: &str, patches: &[Patch]) -> String {
    patches.iter().fold(s!(html), |doc, p| p.apply(&doc))
}

/* ---------------- Section replacement ---------------- */

/// Inner span of the first `tag` after the section anchor, with the
/// indentation its content currently uses.
fn locate<'a>(html: &'a str, section_id: &str, tag: &str) -> Option<(usize, usize, &'a str)> {
    let from = find_anchor(html, section_id)?;
    let (open_end, close_start) = next_inner_span_ci(html, tag, from)?;
    let indent = leading_indent(&html[open_end..close_start]).unwrap_or(DEFAULT_INDENT);
    Some((open_end, close_start, indent))
}

fn try_replace_section_list(html: &str, section_id: &str, tag: &str, new_inner: &str) -> Option<String> {
    let (open_end, close_start, indent) = locate(html, section_id, tag)?;

    let mut body = join!("\n", indent, "<br>\n");
    for line in new_inner.lines() {
        body.push_str(indent);
        body.push_str(line);
        body.push('\n');
    }
    Some(join!(&html[..open_end], &body, &html[close_start..]))
}

fn try_replace_text_after_section(html: &str, section_id: &str, tag: &str, new_text: &str) -> Option<String> {
    let (open_end, close_start, indent) = locate(html, section_id, tag)?;
    Some(join!(&html[..open_end], "\n", indent, new_text, "\n", &html[close_start..]))
}

/// Replace the inner HTML of the first `tag` list after `<div id="section_id"></div>`.
/// The new lines are indented like the old content and led by a `<br>` line.
pub fn replace_section_list(html: &str, section_id: &str, tag: &str, new_inner: &str) -> String {
    try_replace_section_list(html, section_id, tag, new_inner).unwrap_or_else(|| s!(html))
}

/// Replace everything inside the first `tag` after the anchor with one line of text.
pub fn replace_text_after_section(html: &str, section_id: &str, tag: &str, new_text: &str) -> String {
    try_replace_text_after_section(html, section_id, tag, new_text).unwrap_or_else(|| s!(html))
}

/* ---------------- Header substitutions ---------------- */

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(<h2 class="white">)(.*?)(</h2>)"#).expect("name regex"));
static RE_NAME_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(<h3 class="white">)(.*?)(</h3>)"#).expect("english name regex"));
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(<h5 class="white">E-mail:)(.*?)(</h5>)"#).expect("email regex"));
static RE_HOMEPAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<a href=").*?(" class="blue">IEEE author homepage</a>)"#).expect("homepage regex")
});

/// Replace the first match of `re`, keeping its outer groups and putting
/// `value` (taken literally) in between. `None` if nothing matched.
fn replace_once(html: &str, re: &Regex, value: &str) -> Option<String> {
    if !re.is_match(html) {
        return None;
    }
    let last = re.captures_len() - 1;
    let out = re.replacen(html, 1, |caps: &Captures| join!(&caps[1], value, &caps[last]));
    Some(out.into_owned())
}

/// Header substitutions in page order: name, English name, e-mail line,
/// author-homepage link. `None` when no present value found its spot.
pub fn try_apply_profile(html: &str, update: &ProfileUpdate) -> Option<String> {
    let email = update.email.as_deref().map(|e| join!(" ", e));
    let steps: [(&Regex, Option<&str>); 4] = [
        (&*RE_NAME, update.name.as_deref()),
        (&*RE_NAME_EN, update.name_en.as_deref()),
        (&*RE_EMAIL, email.as_deref()),
        (&*RE_HOMEPAGE, update.homepage.as_deref()),
    ];

    let mut doc = s!(html);
    let mut touched = false;
    for (re, value) in steps {
        let Some(value) = value else { continue };
        if let Some(next) = replace_once(&doc, re, value) {
            doc = next;
            touched = true;
        }
    }
    touched.then_some(doc)
}

pub fn apply_profile(html: &str, update: &ProfileUpdate) -> String {
    try_apply_profile(html, update).unwrap_or_else(|| s!(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<body>\n  <div id=\"Award\"></div>\n  <ul class=\"awards\">\n      <li>old</li>\n      <br>\n  </ul>\n  <ul><li>keep</li></ul>\n</body>";

    #[test]
    fn list_replacement_reindents_and_keeps_surroundings() {
        let out = replace_section_list(PAGE, "Award", "ul", "<li>new</li>\n<br>");
        assert_eq!(
            out,
            "<body>\n  <div id=\"Award\"></div>\n  <ul class=\"awards\">\n      <br>\n      <li>new</li>\n      <br>\n</ul>\n  <ul><li>keep</li></ul>\n</body>"
        );
    }

    #[test]
    fn missing_anchor_is_noop() {
        let html = PAGE.replace("<div id=\"Award\"></div>", "");
        assert_eq!(replace_section_list(&html, "Award", "ul", "<li>x</li>"), html);
        assert_eq!(Patch::list("Award", "ul", s!("<li>x</li>")).try_apply(&html), None);
    }

    #[test]
    fn missing_tag_is_noop() {
        assert_eq!(replace_section_list(PAGE, "Award", "ol", "<li>x</li>"), PAGE);
    }

    #[test]
    fn only_first_tag_after_anchor_is_touched() {
        let html = "<ul><li>before</li></ul><div id=\"News\"></div><ul><li>a</li></ul><ul><li>b</li></ul>";
        let out = replace_section_list(html, "News", "ul", "<li>n</li>");
        assert_eq!(
            out,
            "<ul><li>before</li></ul><div id=\"News\"></div><ul>\n            <br>\n            <li>n</li>\n</ul><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn empty_inner_leaves_single_br() {
        let out = replace_section_list(PAGE, "Award", "ul", "");
        assert!(out.contains("<ul class=\"awards\">\n      <br>\n</ul>"));
    }

    #[test]
    fn text_replacement_single_line() {
        let html = "<div id=\"Research Interests\"></div>\n<h5 class=\"t\">\n    old one\n    old two\n</h5>";
        assert_eq!(
            replace_text_after_section(html, "Research Interests", "h5", "Edge AI"),
            "<div id=\"Research Interests\"></div>\n<h5 class=\"t\">\n    Edge AI\n</h5>"
        );
        let inline = "<div id=\"Research Interests\"></div><h5>old</h5>";
        assert_eq!(
            replace_text_after_section(inline, "Research Interests", "h5", "New"),
            "<div id=\"Research Interests\"></div><h5>\n            New\n</h5>"
        );
    }

    #[test]
    fn profile_substitutions_once_each() {
        let html = concat!(
            "<h2 class=\"white\">Old</h2><h2 class=\"white\">Second</h2>\n",
            "<h3 class=\"white\">Old En</h3>\n",
            "<h5 class=\"white\">E-mail: old@x</h5>\n",
            "<a href=\"https://old\" class=\"blue\">IEEE author homepage</a>",
        );
        let update = ProfileUpdate {
            name: Some(s!("李雨辰")),
            name_en: Some(s!("Yuchen $1 Li")),
            email: Some(s!("y@l.cn")),
            homepage: Some(s!("https://ieee/1")),
        };
        assert_eq!(
            apply_profile(html, &update),
            concat!(
                "<h2 class=\"white\">李雨辰</h2><h2 class=\"white\">Second</h2>\n",
                "<h3 class=\"white\">Yuchen $1 Li</h3>\n",
                "<h5 class=\"white\">E-mail: y@l.cn</h5>\n",
                "<a href=\"https://ieee/1\" class=\"blue\">IEEE author homepage</a>",
            )
        );
    }

    #[test]
    fn profile_without_matches_is_noop() {
        let update = ProfileUpdate { name: Some(s!("X")), ..Default::default() };
        assert_eq!(try_apply_profile("<p>no header</p>", &update), None);
        assert_eq!(try_apply_profile("<h2 class=\"white\">A</h2>", &ProfileUpdate::default()), None);
    }

    #[test]
    fn apply_all_folds_in_order() {
        let html = "<div id=\"News\"></div><ul></ul><div id=\"Award\"></div><ul></ul>";
        let patches = vec![
            Patch::list("News", "ul", s!("<li>n</li>")),
            Patch::list("Missing", "ul", s!("<li>m</li>")),
            Patch::list("Award", "ul", s!("<li>a</li>")),
        ];
        let out = apply_all(html, &patches);
        assert_eq!(
            out,
            "<div id=\"News\"></div><ul>\n            <br>\n            <li>n</li>\n</ul>\
             <div id=\"Award\"></div><ul>\n            <br>\n            <li>a</li>\n</ul>"
        );
    }
}
