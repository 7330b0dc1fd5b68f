//! Reference data used to populate pickers: academic years and rooms.

use crate::ids::{AcademicYearId, RoomId};
use crate::value_types::Term;
use chrono::NaiveDate;
use delpresence_core::serde::empty_string_as_none;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An academic period such as "2023/2024" in the ganjil term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: AcademicYearId,
    pub name: String,
    pub semester: Term,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: bool,
}

impl AcademicYear {
    /// True when `date` falls inside the period's dates, if both are known.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.semester)
    }
}

/// Picks the academic year flagged active, falling back to the one whose
/// dates contain `today`.
pub fn current_academic_year(years: &[AcademicYear], today: NaiveDate) -> Option<&AcademicYear> {
    years
        .iter()
        .find(|y| y.is_active)
        .or_else(|| years.iter().find(|y| y.contains(today)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub building: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.building {
            Some(building) => write!(f, "{} ({})", self.name, building),
            None => f.write_str(&self.name),
        }
    }
}
