// src/error.rs
use std::fmt;
use std::path::PathBuf;

/// Which of the two required inputs was missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Workbook,
    Document,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Workbook => f.write_str("Excel file"),
            ResourceKind::Document => f.write_str("HTML file"),
        }
    }
}

/// Fatal errors only. Data-shape mismatches never surface here; they degrade
/// to fewer lines or an untouched section.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{kind} not found: {}", path.display())]
    MissingResource { kind: ResourceKind, path: PathBuf },

    #[error("cannot read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid highlight pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
