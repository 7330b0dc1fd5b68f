//! Study program, faculty and lecturer models.
//!
//! Study programs are the departments every course, course group, student
//! group and schedule is scoped to. Each one belongs to a faculty and may
//! name a lecturer as head of department.

use crate::ids::{FacultyId, LecturerId, StudyProgramId, UserId, validate_id};
use crate::value_types::Degree;
use delpresence_core::serde::{empty_string_as_none, null_as_default};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub dean: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    pub id: LecturerId,
    /// Account id used when assigning the lecturer to courses and schedules
    pub user_id: UserId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub nip: Option<String>,
    pub full_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub program: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyProgram {
    pub id: StudyProgramId,
    pub code: String,
    pub name: String,
    pub faculty_id: FacultyId,
    #[serde(default)]
    pub faculty: Option<Faculty>,
    pub degree: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub accreditation: Option<String>,
    #[serde(default)]
    pub head_of_department_id: Option<LecturerId>,
    #[serde(default)]
    pub head_of_department: Option<Lecturer>,
    #[serde(default)]
    pub establishment_year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lecturer_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_count: u32,
}

impl StudyProgram {
    #[must_use]
    pub fn faculty_name(&self) -> Option<&str> {
        self.faculty.as_ref().map(|f| f.name.as_str())
    }

    #[must_use]
    pub fn head_name(&self) -> Option<&str> {
        self.head_of_department
            .as_ref()
            .map(|l| l.full_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateStudyProgramDto {
    #[validate(length(min = 1, max = 20, message = "Kode program studi wajib diisi (maks. 20 karakter)"))]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "Nama program studi wajib diisi (maks. 100 karakter)"))]
    pub name: String,
    #[validate(custom(function = "validate_id"))]
    pub faculty_id: FacultyId,
    pub degree: Degree,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accreditation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_id"))]
    pub head_of_department_id: Option<LecturerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1900, max = 2100, message = "Tahun berdiri tidak valid"))]
    pub establishment_year: Option<i32>,
}

/// Partial update; unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UpdateStudyProgramDto {
    #[validate(length(min = 1, max = 20, message = "Kode program studi wajib diisi (maks. 20 karakter)"))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Nama program studi wajib diisi (maks. 100 karakter)"))]
    pub name: Option<String>,
    pub faculty_id: Option<FacultyId>,
    pub degree: Option<Degree>,
    pub accreditation: Option<String>,
    pub head_of_department_id: Option<LecturerId>,
    pub establishment_year: Option<i32>,
}

impl UpdateStudyProgramDto {
    /// Merges the changes over `existing` into the full body sent with PUT.
    ///
    /// Fails when the stored degree is not one the form accepts and no new
    /// degree is given.
    pub fn merge_into(self, existing: &StudyProgram) -> Result<CreateStudyProgramDto, String> {
        let degree = match self.degree {
            Some(degree) => degree,
            None => existing
                .degree
                .parse()
                .map_err(|e: crate::value_types::ValueParseError| e.to_string())?,
        };

        Ok(CreateStudyProgramDto {
            code: self.code.unwrap_or_else(|| existing.code.clone()),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            faculty_id: self.faculty_id.unwrap_or(existing.faculty_id),
            degree,
            accreditation: self.accreditation.or_else(|| existing.accreditation.clone()),
            head_of_department_id: self
                .head_of_department_id
                .or(existing.head_of_department_id),
            establishment_year: self.establishment_year.or(existing.establishment_year),
        })
    }
}
