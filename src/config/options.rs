// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub workbook: PathBuf,           // spreadsheet to read
    pub document: PathBuf,           // HTML read and rewritten in place
    pub dry_run: bool,               // compute and report, never write
    pub highlight: Option<String>,   // author-highlight regex override
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK_FILE),
            document: PathBuf::from(DEFAULT_DOCUMENT_FILE),
            dry_run: false,
            highlight: None,
        }
    }
}

impl RunOptions {
    /// Options with both inputs placed in `dir` under their default names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            workbook: dir.join(DEFAULT_WORKBOOK_FILE),
            document: dir.join(DEFAULT_DOCUMENT_FILE),
            ..Self::default()
        }
    }

    pub fn highlight_pattern(&self) -> &str {
        self.highlight.as_deref().unwrap_or(DEFAULT_HIGHLIGHT_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory() {
        let opts = RunOptions::default();
        assert_eq!(opts.workbook, PathBuf::from("library_update_this_file.xlsx"));
        assert_eq!(opts.document, PathBuf::from("index.html"));
        assert_eq!(opts.highlight_pattern(), DEFAULT_HIGHLIGHT_PATTERN);
    }

    #[test]
    fn in_dir_joins_default_names() {
        let opts = RunOptions::in_dir(Path::new("site"));
        assert_eq!(opts.document, Path::new("site").join("index.html"));
        assert!(!opts.dry_run);
    }
}
