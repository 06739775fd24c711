// src/file.rs

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, ResourceKind, Result};

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io { path: path.to_path_buf(), source }
}

/// Whole document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::MissingResource { kind: ResourceKind::Document, path: path.to_path_buf() });
    }
    fs::read_to_string(path).map_err(io_err(path))
}

/// Directory the document lives in; "." for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Replace the document in one step: write a uniquely named temp file next
/// to it, then rename it over the original. A failed write leaves the
/// original untouched and removes the temp file.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(parent_dir(path)).map_err(io_err(path))?;
    tmp.write_all(contents.as_bytes()).map_err(io_err(path))?;
    tmp.as_file().sync_all().map_err(io_err(path))?;
    tmp.persist(path).map_err(|e| io_err(path)(e.error))?;
    Ok(())
}
