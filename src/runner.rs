// src/runner.rs
//! Orchestration: worksheets → patches → patched page.
//!
//! `update_document` is the pure core (no I/O). `run` wraps it with the
//! file handling: both inputs must exist, the page is read once, the
//! workbook loaded once, and the page written once at the end.

use std::path::PathBuf;

use crate::config::options::RunOptions;
use crate::error::{Error, ResourceKind, Result};
use crate::patch::Patch;
use crate::progress::{NullProgress, Progress};
use crate::records::{Record, extract_records};
use crate::section::{Category, Target, classify};
use crate::specs::authors::Highlighter;
use crate::specs::profile::ProfileUpdate;
use crate::specs::{awards, book_chapter, correspondence, news, patents, publications, text_block};
use crate::workbook::{self, Worksheet};
use crate::file;

/// Summary of what a run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sheets_seen: usize,
    /// Sections whose content was replaced, in application order.
    pub applied: Vec<String>,
    /// Sections whose anchor or tag was not found in the page.
    pub skipped: Vec<String>,
    pub changed: bool,
    pub written: Option<PathBuf>,
}

/// HTML fragment for a list-shaped category.
fn list_fragment(category: Category, rows: &[Record], hl: &Highlighter) -> String {
    match category {
        Category::News => news::build_items(rows),
        Category::FeaturedArticle | Category::Journal | Category::Conference => {
            publications::build_items(rows, hl)
        }
        Category::BookChapter => book_chapter::build_items(rows, hl),
        Category::Patent => patents::build_items(rows),
        Category::Award => awards::build_items(rows),
        Category::Correspondence => correspondence::build_items(rows),
        _ => s!(),
    }
}

/// The patch one worksheet contributes, if any.
pub fn build_patch(sheet: &Worksheet, hl: &Highlighter) -> (Category, Option<Patch>) {
    let rows = extract_records(&sheet.rows);
    let category = classify(&sheet.title);
    if rows.is_empty() {
        return (category, None);
    }
    let patch = match category.target() {
        Some(Target::List { anchor, tag }) => Some(Patch::list(anchor, tag, list_fragment(category, &rows, hl))),
        Some(Target::Text { anchor, tag }) => Some(Patch::text(anchor, tag, text_block::build_text(&rows))),
        Some(Target::Profile) => {
            let update = ProfileUpdate::from_rows(&rows);
            (!update.is_empty()).then_some(Patch::Profile(update))
        }
        None => None,
    };
    (category, patch)
}

/// Patches for all worksheets, in worksheet order.
pub fn collect_patches(
    sheets: &[Worksheet],
    hl: &Highlighter,
    progress: &mut dyn Progress,
) -> Vec<Patch> {
    progress.begin(sheets.len());
    let mut patches = Vec::new();
    for sheet in sheets {
        let (category, patch) = build_patch(sheet, hl);
        match &patch {
            Some(p) => logd!("Sheet '{}' → {:?} ({})", sheet.title, category, p.section()),
            None => logd!("Sheet '{}' → {:?} (skipped)", sheet.title, category),
        }
        progress.sheet_done(&sheet.title, category);
        patches.extend(patch);
    }
    patches
}

/// Apply `patches` to `html` in order. Pure: returns the new text and a summary.
pub fn update_document(
    html: &str,
    patches: &[Patch],
    progress: &mut dyn Progress,
) -> (String, RunSummary) {
    let mut summary = RunSummary::default();
    let mut doc = s!(html);
    for p in patches {
        match p.try_apply(&doc) {
            Some(next) => {
                logf!("Patch: {} updated", p.section());
                summary.applied.push(s!(p.section()));
                doc = next;
            }
            None => {
                logf!("Patch: {} not found in page, left unchanged", p.section());
                progress.section_skipped(p.section());
                summary.skipped.push(s!(p.section()));
            }
        }
    }
    summary.changed = doc != html;
    (doc, summary)
}

/// Worksheets + page text → new page text. No I/O.
pub fn process_sheets(
    sheets: &[Worksheet],
    html: &str,
    hl: &Highlighter,
    progress: &mut dyn Progress,
) -> (String, RunSummary) {
    let patches = collect_patches(sheets, hl, progress);
    let (doc, mut summary) = update_document(html, &patches, progress);
    summary.sheets_seen = sheets.len();
    (doc, summary)
}

/// Full run: read both inputs, patch, write the page back once.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    // Both inputs are checked before anything is read.
    if !opts.workbook.is_file() {
        return Err(Error::MissingResource { kind: ResourceKind::Workbook, path: opts.workbook.clone() });
    }
    if !opts.document.is_file() {
        return Err(Error::MissingResource { kind: ResourceKind::Document, path: opts.document.clone() });
    }

    let hl = Highlighter::new(opts.highlight_pattern())?;
    let sheets = workbook::load(&opts.workbook)?;
    let html = file::read_document(&opts.document)?;
    logf!("Run: {} sheet(s) from {}", sheets.len(), opts.workbook.display());

    let (doc, mut summary) = process_sheets(&sheets, &html, &hl, progress);

    if opts.dry_run {
        logf!("Run: dry run, {} not written", opts.document.display());
        progress.log("Dry run: page not written");
    } else if summary.changed {
        file::write_document(&opts.document, &doc)?;
        logf!("Run: wrote {}", opts.document.display());
        summary.written = Some(opts.document.clone());
    } else {
        logf!("Run: {} already up to date", opts.document.display());
        progress.log("Page already up to date");
    }
    progress.finish();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sheet_contributes_nothing() {
        let sheet = Worksheet::from_strings("News", &[&["date", "text"]]);
        assert_eq!(build_patch(&sheet, &Highlighter::default()), (Category::News, None));
    }

    #[test]
    fn biography_and_unknown_are_skipped() {
        let hl = Highlighter::default();
        let bio = Worksheet::from_strings("Biography", &[&["text"], &["Born somewhere"]]);
        let other = Worksheet::from_strings("Scratch", &[&["a"], &["b"]]);
        assert_eq!(build_patch(&bio, &hl).1, None);
        assert_eq!(build_patch(&other, &hl), (Category::Unknown, None));
    }

    #[test]
    fn research_interests_become_text_patch() {
        let sheet = Worksheet::from_strings("研究兴趣", &[&["topic", "more"], &["Edge AI,", "6G"]]);
        assert_eq!(
            build_patch(&sheet, &Highlighter::default()).1,
            Some(Patch::text("Research Interests", "h5", s!("Edge AI, 6G")))
        );
    }

    #[test]
    fn profile_sheet_without_known_columns_adds_no_patch() {
        let sheet = Worksheet::from_strings("Profile", &[&["nickname", "motto"], &["YL", "Keep going"]]);
        assert_eq!(build_patch(&sheet, &Highlighter::default()), (Category::HeaderProfile, None));

        let html = "<h2 class=\"white\">Old</h2>";
        let (doc, summary) = process_sheets(&[sheet], html, &Highlighter::default(), &mut NullProgress);
        assert_eq!(doc, html);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn skipped_sections_are_reported() {
        struct Count(usize);
        impl Progress for Count {
            fn section_skipped(&mut self, _section: &str) { self.0 += 1; }
        }
        let mut count = Count(0);
        let patches = vec![Patch::list("Patent", "ol", s!("<li>x</li>"))];
        let (doc, summary) = update_document("<p>no anchors</p>", &patches, &mut count);
        assert_eq!(doc, "<p>no anchors</p>");
        assert_eq!(summary.skipped, vec![s!("Patent")]);
        assert!(!summary.changed);
        assert_eq!(count.0, 1);
    }
}
