use delpresence_core::filter::{DepartmentFilter, ListFilter, SemesterFilter, TextQuery, eq_if_set};
use delpresence_models::courses::Course;
use delpresence_models::ids::AcademicYearId;
use delpresence_models::value_types::CourseType;

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub search: TextQuery,
    pub department: DepartmentFilter,
    pub semester: SemesterFilter,
    pub academic_year_id: Option<AcademicYearId>,
    pub course_type: Option<CourseType>,
}

impl ListFilter<Course> for CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        self.search
            .matches_any([Some(course.code.as_str()), Some(course.name.as_str())])
            && self.department.matches(
                Some(course.department_id.get()),
                course.department_name.as_deref(),
            )
            && self.semester.matches(course.semester)
            && eq_if_set(self.academic_year_id.as_ref(), &course.academic_year_id)
            && eq_if_set(self.course_type.as_ref(), &course.course_type)
    }

    fn is_cleared(&self) -> bool {
        self.search.is_empty()
            && self.department.is_any()
            && self.semester.is_any()
            && self.academic_year_id.is_none()
            && self.course_type.is_none()
    }
}
