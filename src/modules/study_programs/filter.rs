use delpresence_core::filter::{ListFilter, TextQuery, eq_if_set};
use delpresence_models::ids::FacultyId;
use delpresence_models::study_programs::StudyProgram;

/// Search over code, name, faculty and head of department, plus a faculty selector.
#[derive(Debug, Clone, Default)]
pub struct StudyProgramFilter {
    pub search: TextQuery,
    pub faculty_id: Option<FacultyId>,
}

impl StudyProgramFilter {
    pub fn new(search: Option<&str>, faculty_id: Option<FacultyId>) -> Self {
        Self {
            search: TextQuery::new(search),
            faculty_id,
        }
    }
}

impl ListFilter<StudyProgram> for StudyProgramFilter {
    fn matches(&self, program: &StudyProgram) -> bool {
        eq_if_set(self.faculty_id.as_ref(), &program.faculty_id)
            && self.search.matches_any([
                Some(program.code.as_str()),
                Some(program.name.as_str()),
                program.faculty_name(),
                program.head_name(),
            ])
    }

    fn is_cleared(&self) -> bool {
        self.search.is_empty() && self.faculty_id.is_none()
    }
}
