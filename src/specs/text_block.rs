// src/specs/text_block.rs

use crate::records::Record;

/// Space-joined non-empty values of the first record that has any.
pub fn build_text(rows: &[Record]) -> String {
    rows.iter()
        .find(|r| r.has_any_value())
        .map(|r| r.non_empty_values().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
