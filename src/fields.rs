// src/fields.rs
//! Field resolution against drifting, possibly bilingual column headers.
//!
//! Two passes, both case-insensitive: an exact name match for any candidate
//! (candidates tried in order), then the first header that contains any
//! candidate as a substring. "Conference" and "conference_name" both resolve
//! for `["conference"]`, but a literal "Title" column always beats
//! "chapter_title" for `["title"]`.

use crate::records::Record;

/// Name of the field in `rec` matching one of `candidates`, if any.
pub fn find_col<'r>(rec: &'r Record, candidates: &[&str]) -> Option<&'r str> {
    let lowered: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();

    for cand in &lowered {
        if let Some(name) = rec.names().find(|n| n.to_lowercase() == *cand) {
            return Some(name);
        }
    }
    rec.names().find(|n| {
        let nl = n.to_lowercase();
        lowered.iter().any(|c| nl.contains(c.as_str()))
    })
}

/// Value of the resolved field, or "" when no column matches.
pub fn value_of<'r>(rec: &'r Record, candidates: &[&str]) -> &'r str {
    find_col(rec, candidates).and_then(|k| rec.get(k)).unwrap_or("")
}

/// Resolved value, only when non-empty.
pub fn non_empty<'r>(rec: &'r Record, candidates: &[&str]) -> Option<&'r str> {
    Some(value_of(rec, candidates)).filter(|v| !v.is_empty())
}
