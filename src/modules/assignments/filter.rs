use delpresence_core::filter::{ListFilter, TextQuery, eq_if_set};
use delpresence_models::assignments::LecturerAssignment;
use delpresence_models::ids::{AcademicYearId, CourseId};

/// Search over lecturer and course, plus academic year and course selectors.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFilter {
    pub search: TextQuery,
    pub academic_year_id: Option<AcademicYearId>,
    pub course_id: Option<CourseId>,
}

impl ListFilter<LecturerAssignment> for AssignmentFilter {
    fn matches(&self, assignment: &LecturerAssignment) -> bool {
        self.search.matches_any([
            assignment.lecturer_name.as_deref(),
            assignment.lecturer_nip.as_deref(),
            assignment.course_code.as_deref(),
            assignment.course_name.as_deref(),
        ]) && eq_if_set(self.academic_year_id.as_ref(), &assignment.academic_year_id)
            && eq_if_set(self.course_id.as_ref(), &assignment.course_id)
    }

    fn is_cleared(&self) -> bool {
        self.search.is_empty() && self.academic_year_id.is_none() && self.course_id.is_none()
    }
}
