//! Course models.

use crate::ids::{AcademicYearId, CourseId, DepartmentId, validate_id};
use crate::value_types::CourseType;
use delpresence_core::serde::empty_string_as_none;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub name: String,
    /// Credit units (SKS)
    pub sks: u8,
    pub semester: u8,
    pub course_type: CourseType,
    pub department_id: DepartmentId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department_name: Option<String>,
    pub academic_year_id: AcademicYearId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub academic_year_name: Option<String>,
}

impl Course {
    /// "IF2101 - Basis Data"
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 20, message = "Kode mata kuliah wajib diisi (maks. 20 karakter)"))]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "Nama mata kuliah wajib diisi (maks. 100 karakter)"))]
    pub name: String,
    #[validate(range(min = 1, max = 6, message = "SKS harus antara 1 dan 6"))]
    pub sks: u8,
    #[validate(range(min = 1, max = 8, message = "Semester harus antara 1 dan 8"))]
    pub semester: u8,
    pub course_type: CourseType,
    #[validate(custom(function = "validate_id"))]
    pub department_id: DepartmentId,
    #[validate(custom(function = "validate_id"))]
    pub academic_year_id: AcademicYearId,
}

/// Partial update; unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCourseDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub sks: Option<u8>,
    pub semester: Option<u8>,
    pub course_type: Option<CourseType>,
    pub department_id: Option<DepartmentId>,
    pub academic_year_id: Option<AcademicYearId>,
}

impl UpdateCourseDto {
    /// Merges the changes over `existing`; the result is validated before sending.
    #[must_use]
    pub fn merge_into(self, existing: &Course) -> CreateCourseDto {
        CreateCourseDto {
            code: self.code.unwrap_or_else(|| existing.code.clone()),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            sks: self.sks.unwrap_or(existing.sks),
            semester: self.semester.unwrap_or(existing.semester),
            course_type: self.course_type.unwrap_or(existing.course_type),
            department_id: self.department_id.unwrap_or(existing.department_id),
            academic_year_id: self.academic_year_id.unwrap_or(existing.academic_year_id),
        }
    }
}
