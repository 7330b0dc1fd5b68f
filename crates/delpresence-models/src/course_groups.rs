//! Course group models and their derived fields.
//!
//! A course group is an administrative bucket of courses within one
//! department. The semester range and total credits shown next to a group
//! are computed from whichever courses are selected.

use crate::courses::Course;
use crate::ids::{CourseGroupId, CourseId, DepartmentId, validate_id};
use delpresence_core::serde::{empty_string_as_none, null_as_default};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseGroup {
    pub id: CourseGroupId,
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    pub department_id: DepartmentId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_ids: Vec<CourseId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<Course>,
}

impl CourseGroup {
    #[must_use]
    pub fn semester_range(&self) -> Option<SemesterRange> {
        semester_range(&self.courses)
    }

    #[must_use]
    pub fn total_credits(&self) -> u32 {
        total_credits(&self.courses)
    }

    /// Ids of the member courses, from `course_ids` or the embedded courses.
    #[must_use]
    pub fn member_ids(&self) -> Vec<CourseId> {
        if self.course_ids.is_empty() {
            self.courses.iter().map(|c| c.id).collect()
        } else {
            self.course_ids.clone()
        }
    }
}

/// Inclusive range of semesters covered by a set of courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterRange {
    pub min: u8,
    pub max: u8,
}

impl fmt::Display for SemesterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "Semester {}", self.min)
        } else {
            write!(f, "Semester {} - {}", self.min, self.max)
        }
    }
}

#[must_use]
pub fn semester_range(courses: &[Course]) -> Option<SemesterRange> {
    let min = courses.iter().map(|c| c.semester).min()?;
    let max = courses.iter().map(|c| c.semester).max()?;
    Some(SemesterRange { min, max })
}

#[must_use]
pub fn total_credits(courses: &[Course]) -> u32 {
    courses.iter().map(|c| u32::from(c.sks)).sum()
}

/// Resolves selected ids against the fetched course list, keeping list order.
#[must_use]
pub fn selected_courses(all: &[Course], ids: &[CourseId]) -> Vec<Course> {
    all.iter().filter(|c| ids.contains(&c.id)).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateCourseGroupDto {
    #[validate(length(min = 1, max = 100, message = "Nama kelompok mata kuliah wajib diisi (maks. 100 karakter)"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = "validate_id"))]
    pub department_id: DepartmentId,
    #[validate(length(min = 1, message = "Pilih minimal satu mata kuliah"))]
    pub course_ids: Vec<CourseId>,
}

/// Partial update; unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCourseGroupDto {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub course_ids: Option<Vec<CourseId>>,
}

impl UpdateCourseGroupDto {
    #[must_use]
    pub fn merge_into(self, existing: &CourseGroup) -> CreateCourseGroupDto {
        CreateCourseGroupDto {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            code: self.code.or_else(|| existing.code.clone()),
            description: self.description.or_else(|| existing.description.clone()),
            department_id: self.department_id.unwrap_or(existing.department_id),
            course_ids: self.course_ids.unwrap_or_else(|| existing.member_ids()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_types::CourseType;
    use crate::ids::AcademicYearId;

    fn course(id: u64, semester: u8, sks: u8) -> Course {
        Course {
            id: CourseId::new(id),
            code: format!("IF{id}"),
            name: format!("Course {id}"),
            sks,
            semester,
            course_type: CourseType::Theory,
            department_id: DepartmentId::new(1),
            department_name: None,
            academic_year_id: AcademicYearId::new(1),
            academic_year_name: None,
        }
    }

    #[test]
    fn test_semester_range_and_credits() {
        let courses = vec![course(1, 3, 3), course(2, 1, 2), course(3, 5, 4)];
        let range = semester_range(&courses).unwrap();
        assert_eq!(range, SemesterRange { min: 1, max: 5 });
        assert_eq!(range.to_string(), "Semester 1 - 5");
        assert_eq!(total_credits(&courses), 9);
    }

    #[test]
    fn test_single_semester_display() {
        let range = semester_range(&[course(1, 2, 3), course(2, 2, 3)]).unwrap();
        assert_eq!(range.to_string(), "Semester 2");
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(semester_range(&[]), None);
        assert_eq!(total_credits(&[]), 0);
    }

    #[test]
    fn test_selected_courses_keeps_list_order() {
        let all = vec![course(1, 1, 2), course(2, 2, 3), course(3, 3, 4)];
        let picked = selected_courses(&all, &[CourseId::new(3), CourseId::new(1)]);
        let ids: Vec<u64> = picked.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_member_ids_fall_back_to_embedded_courses() {
        let group: CourseGroup = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Wajib",
            "department_id": 1,
            "course_ids": null,
            "courses": [
                { "id": 5, "code": "A", "name": "A", "sks": 2, "semester": 1,
                  "course_type": "theory", "department_id": 1, "academic_year_id": 1 }
            ]
        }))
        .unwrap();
        assert_eq!(group.member_ids(), vec![CourseId::new(5)]);
        assert_eq!(group.total_credits(), 2);
    }

    #[test]
    fn test_create_requires_courses() {
        let dto = CreateCourseGroupDto {
            name: "Pilihan".to_string(),
            code: None,
            description: None,
            department_id: DepartmentId::new(1),
            course_ids: vec![],
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("course_ids"));
    }
}
