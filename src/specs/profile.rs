// src/specs/profile.rs
//! Header/profile values. Each present field later replaces exactly one
//! spot in the page header; absent fields leave the page alone.

use crate::fields::non_empty;
use crate::records::Record;
use super::cols;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub email: Option<String>,
    pub homepage: Option<String>,
}

impl ProfileUpdate {
    /// Values from the first record of the profile sheet.
    pub fn from_rows(rows: &[Record]) -> Self {
        let Some(row) = rows.first() else {
            return Self::default();
        };
        let pick = |cands: &[&str]| non_empty(row, cands).map(String::from);
        Self {
            name: pick(cols::NAME_CN),
            name_en: pick(cols::NAME_EN),
            email: pick(cols::PROFILE_EMAIL),
            homepage: pick(cols::PROFILE_HOMEPAGE),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.name_en.is_none() && self.email.is_none() && self.homepage.is_none()
    }
}
