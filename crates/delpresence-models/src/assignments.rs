//! Lecturer-to-course assignments within an academic year.

use crate::ids::{AcademicYearId, AssignmentId, CourseId, UserId, validate_id};
use delpresence_core::serde::empty_string_as_none;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LecturerAssignment {
    pub id: AssignmentId,
    /// Lecturer's user account id
    pub user_id: UserId,
    pub course_id: CourseId,
    pub academic_year_id: AcademicYearId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub lecturer_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub lecturer_nip: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub academic_year_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateAssignmentDto {
    #[validate(custom(function = "validate_id"))]
    pub user_id: UserId,
    #[validate(custom(function = "validate_id"))]
    pub course_id: CourseId,
    #[validate(custom(function = "validate_id"))]
    pub academic_year_id: AcademicYearId,
}

/// Partial update; unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAssignmentDto {
    pub user_id: Option<UserId>,
    pub course_id: Option<CourseId>,
    pub academic_year_id: Option<AcademicYearId>,
}

impl UpdateAssignmentDto {
    #[must_use]
    pub fn merge_into(self, existing: &LecturerAssignment) -> CreateAssignmentDto {
        CreateAssignmentDto {
            user_id: self.user_id.unwrap_or(existing.user_id),
            course_id: self.course_id.unwrap_or(existing.course_id),
            academic_year_id: self.academic_year_id.unwrap_or(existing.academic_year_id),
        }
    }
}
