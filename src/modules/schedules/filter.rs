use delpresence_core::filter::{DepartmentFilter, ListFilter, SemesterFilter, TextQuery, eq_if_set};
use delpresence_models::ids::{AcademicYearId, RoomId, UserId};
use delpresence_models::schedules::CourseSchedule;
use delpresence_models::value_types::Day;

#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub search: TextQuery,
    pub day: Option<Day>,
    pub department: DepartmentFilter,
    pub semester: SemesterFilter,
    pub academic_year_id: Option<AcademicYearId>,
    pub room_id: Option<RoomId>,
    pub lecturer_id: Option<UserId>,
}

impl ListFilter<CourseSchedule> for ScheduleFilter {
    fn matches(&self, schedule: &CourseSchedule) -> bool {
        self.search.matches_any([
            schedule.course_code.as_deref(),
            schedule.course_name.as_deref(),
            schedule.lecturer_name.as_deref(),
            schedule.room_name.as_deref(),
            schedule.student_group_name.as_deref(),
        ]) && eq_if_set(self.day.as_ref(), &schedule.day)
            && self.department.matches(
                schedule.department_id.map(|id| id.get()),
                schedule.department_name.as_deref(),
            )
            && self.semester.matches_opt(schedule.semester)
            && eq_if_set(self.academic_year_id.as_ref(), &schedule.academic_year_id)
            && eq_if_set(self.room_id.as_ref(), &schedule.room_id)
            && eq_if_set(self.lecturer_id.as_ref(), &schedule.lecturer_id)
    }

    fn is_cleared(&self) -> bool {
        self.search.is_empty()
            && self.day.is_none()
            && self.department.is_any()
            && self.semester.is_any()
            && self.academic_year_id.is_none()
            && self.room_id.is_none()
            && self.lecturer_id.is_none()
    }
}
