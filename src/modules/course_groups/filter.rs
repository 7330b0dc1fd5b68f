use delpresence_core::filter::{DepartmentFilter, ListFilter, TextQuery};
use delpresence_models::course_groups::CourseGroup;

#[derive(Debug, Clone, Default)]
pub struct CourseGroupFilter {
    pub search: TextQuery,
    pub department: DepartmentFilter,
}

impl ListFilter<CourseGroup> for CourseGroupFilter {
    fn matches(&self, group: &CourseGroup) -> bool {
        let course_names = group.courses.iter().map(|c| Some(c.name.as_str()));
        self.search.matches_any(
            [
                Some(group.name.as_str()),
                group.code.as_deref(),
                group.description.as_deref(),
            ]
            .into_iter()
            .chain(course_names),
        ) && self.department.matches(
            Some(group.department_id.get()),
            group.department_name.as_deref(),
        )
    }

    fn is_cleared(&self) -> bool {
        self.search.is_empty() && self.department.is_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn groups() -> Vec<CourseGroup> {
        serde_json::from_value(json!([
            { "id": 1, "name": "Kelompok Inti", "department_id": 1, "department_name": "Informatika",
              "courses": [
                { "id": 5, "code": "IF2201", "name": "Basis Data", "sks": 3, "semester": 3,
                  "course_type": "theory", "department_id": 1, "academic_year_id": 1 }
              ] },
            { "id": 2, "name": "Pilihan", "code": "PIL", "department_id": 2,
              "department_name": "Sistem Informasi" }
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_includes_member_course_names() {
        let filter = CourseGroupFilter {
            search: TextQuery::new(Some("basis")),
            ..Default::default()
        };
        assert_eq!(filter.apply(&groups())[0].name, "Kelompok Inti");
    }

    #[test]
    fn test_department_filter() {
        let filter = CourseGroupFilter {
            department: "prodi sistem informasi".parse().unwrap(),
            ..Default::default()
        };
        let found = filter.apply(&groups());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code.as_deref(), Some("PIL"));
    }
}
