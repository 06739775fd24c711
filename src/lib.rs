// src/lib.rs
// Spreadsheet → homepage section updater.
//
// Pipeline: worksheet grid → records → category (by sheet title)
// → HTML fragment → anchor-based patch → page text.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fields;
pub mod file;
pub mod patch;
pub mod progress;
pub mod records;
pub mod runner;
pub mod section;
pub mod specs;
pub mod workbook;

pub use error::{Error, ResourceKind, Result};
