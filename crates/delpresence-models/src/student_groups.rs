//! Student groups and their membership.

use crate::ids::{AcademicYearId, DepartmentId, StudentGroupId, StudentId, UserId, validate_id};
use delpresence_core::serde::{empty_string_as_none, null_as_default};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGroup {
    pub id: StudentGroupId,
    pub name: String,
    pub department_id: DepartmentId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department_name: Option<String>,
    pub semester: u8,
    #[serde(default)]
    pub academic_year_id: Option<AcademicYearId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Student registration number
    pub nim: String,
    pub full_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department_name: Option<String>,
    /// Intake year (angkatan)
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateStudentGroupDto {
    #[validate(length(min = 1, max = 100, message = "Nama kelompok wajib diisi (maks. 100 karakter)"))]
    pub name: String,
    #[validate(custom(function = "validate_id"))]
    pub department_id: DepartmentId,
    #[validate(range(min = 1, max = 8, message = "Semester harus antara 1 dan 8"))]
    pub semester: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_id"))]
    pub academic_year_id: Option<AcademicYearId>,
}

/// Partial update; unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStudentGroupDto {
    pub name: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub semester: Option<u8>,
    pub academic_year_id: Option<AcademicYearId>,
}

impl UpdateStudentGroupDto {
    #[must_use]
    pub fn merge_into(self, existing: &StudentGroup) -> CreateStudentGroupDto {
        CreateStudentGroupDto {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            department_id: self.department_id.unwrap_or(existing.department_id),
            semester: self.semester.unwrap_or(existing.semester),
            academic_year_id: self.academic_year_id.or(existing.academic_year_id),
        }
    }
}

/// Body of `POST .../members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AddMemberDto {
    #[validate(custom(function = "validate_id"))]
    pub student_id: StudentId,
}

/// Body of `POST .../members/batch` and `POST .../members/remove-batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BatchMembersDto {
    #[validate(length(min = 1, message = "Pilih minimal satu mahasiswa"))]
    pub student_ids: Vec<StudentId>,
}

/// Outcome reported by the batch endpoints, when the backend sends one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchMembersResponse {
    #[serde(default)]
    pub affected_count: Option<usize>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_ids: Vec<StudentId>,
}
