// src/records.rs
//! Row extraction: a raw cell grid becomes an ordered list of [`Record`]s.
//!
//! The first row holding any non-blank cell is the header row. Blank header
//! cells get positional names (`col_0`, `col_1`, …). Every later non-blank
//! row is zipped against the headers: cells past the last header are dropped,
//! missing trailing cells read as "". Nothing here fails; odd grids just
//! yield fewer or emptier records.

use crate::workbook::{Cell, cell_text, is_blank};

/// One data row as ordered `(field name, trimmed value)` pairs.
/// Duplicate field names are kept in place; lookups return the first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from literal pairs (tests, fixtures).
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self { fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Value of the first field literally named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Non-empty values in column order.
    pub fn non_empty_values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str()).filter(|v| !v.is_empty())
    }

    pub fn has_any_value(&self) -> bool {
        self.non_empty_values().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn row_is_blank(row: &[Cell]) -> bool {
    row.iter().all(is_blank)
}

/// Header names for `row`; blank cells become `col_<position>`.
pub fn header_names(row: &[Cell]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(i, c)| {
            let h = cell_text(c);
            if h.is_empty() { format!("col_{i}") } else { h }
        })
        .collect()
}

/// Records for every non-blank row after the header row, in row order.
pub fn extract_records(rows: &[Vec<Cell>]) -> Vec<Record> {
    let Some(header_ix) = rows.iter().position(|r| !row_is_blank(r)) else {
        return Vec::new();
    };
    let headers = header_names(&rows[header_ix]);

    rows[header_ix + 1..]
        .iter()
        .filter(|r| !row_is_blank(r))
        .map(|row| {
            let mut rec = Record::new();
            for (i, name) in headers.iter().enumerate() {
                let value = row.get(i).map(cell_text).unwrap_or_default();
                rec.push(name.clone(), value);
            }
            rec
        })
        .collect()
}
