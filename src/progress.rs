// src/progress.rs
use crate::section::Category;

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of worksheets.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A worksheet was classified (including skipped categories).
    fn sheet_done(&mut self, _title: &str, _category: Category) {}

    /// A section's anchor or tag was missing; the page keeps its old content there.
    fn section_skipped(&mut self, _section: &str) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
