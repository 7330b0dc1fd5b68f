use delpresence_core::filter::{DepartmentFilter, ListFilter, SemesterFilter, TextQuery};
use delpresence_models::student_groups::{Student, StudentGroup};

#[derive(Debug, Clone, Default)]
pub struct StudentGroupFilter {
    pub search: TextQuery,
    pub department: DepartmentFilter,
    pub semester: SemesterFilter,
}

impl ListFilter<StudentGroup> for StudentGroupFilter {
    fn matches(&self, group: &StudentGroup) -> bool {
        self.search
            .matches_any([Some(group.name.as_str()), group.department_name.as_deref()])
            && self.department.matches(
                Some(group.department_id.get()),
                group.department_name.as_deref(),
            )
            && self.semester.matches(group.semester)
    }

    fn is_cleared(&self) -> bool {
        self.search.is_empty() && self.department.is_any() && self.semester.is_any()
    }
}

/// Search over NIM, name and email in the member and available lists.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub search: TextQuery,
}

impl StudentFilter {
    pub fn new(search: Option<&str>) -> Self {
        Self {
            search: TextQuery::new(search),
        }
    }
}

impl ListFilter<Student> for StudentFilter {
    fn matches(&self, student: &Student) -> bool {
        self.search.matches_any([
            Some(student.nim.as_str()),
            Some(student.full_name.as_str()),
            student.email.as_deref(),
        ])
    }

    fn is_cleared(&self) -> bool {
        self.search.is_empty()
    }
}
