// src/workbook.rs
//! Workbook loading.
//!
//! Turns any calamine-readable spreadsheet into plain [`Worksheet`] grids:
//! a title plus rows of optional scalar cells. Nothing downstream sees
//! calamine types, so the rest of the pipeline is testable with hand-built
//! grids.

use std::fmt;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::Timelike;

use crate::error::{Error, ResourceKind, Result};

/// One scalar cell value. Blank cells are `None` in the grid.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            // Whole numbers print like integers: a year cell is "2023", not "2023.0".
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s!(s))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

pub type Cell = Option<CellValue>;

/// Trimmed text of a cell; blank cells and whitespace-only text give "".
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Some(v) => v.to_string().trim().to_string(),
        None => s!(),
    }
}

pub fn is_blank(cell: &Cell) -> bool {
    cell_text(cell).is_empty()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Worksheet {
    pub title: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    pub fn new(title: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { title: title.into(), rows }
    }

    /// Grid from plain strings; empty strings become blank cells.
    pub fn from_strings(title: impl Into<String>, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|r| {
                r.iter()
                    .map(|c| if c.is_empty() { None } else { Some(CellValue::from(*c)) })
                    .collect()
            })
            .collect();
        Self::new(title, rows)
    }
}

/// Read every worksheet of the workbook at `path`, in workbook order.
pub fn load(path: &Path) -> Result<Vec<Worksheet>> {
    if !path.is_file() {
        return Err(Error::MissingResource { kind: ResourceKind::Workbook, path: path.to_path_buf() });
    }
    let wb_err = |e: calamine::Error| Error::Workbook { path: path.to_path_buf(), message: e.to_string() };

    let mut workbook = open_workbook_auto(path).map_err(wb_err)?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).map_err(wb_err)?;

        // The reader trims leading blank rows/columns; put them back so
        // placeholder column names line up with the sheet's real columns.
        let (row0, col0) = range.start().unwrap_or((0, 0));
        let mut rows: Vec<Vec<Cell>> = (0..row0).map(|_| Vec::new()).collect();
        for r in range.rows() {
            let mut row: Vec<Cell> = vec![None; col0 as usize];
            row.extend(r.iter().map(convert_cell));
            rows.push(row);
        }
        logd!("Workbook: sheet '{}' rows={}", name, rows.len());
        sheets.push(Worksheet::new(name, rows));
    }
    Ok(sheets)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(match dt.as_datetime() {
            Some(ndt) if ndt.hour() == 0 && ndt.minute() == 0 && ndt.second() == 0 => {
                CellValue::Text(ndt.format("%Y-%m-%d").to_string())
            }
            Some(ndt) => CellValue::Text(ndt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Number(dt.as_f64()),
        }),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
    }
}
