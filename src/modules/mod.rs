pub mod assignments;
pub mod attendance;
pub mod course_groups;
pub mod courses;
pub mod reference;
pub mod schedules;
pub mod student_groups;
pub mod study_programs;

pub use self::assignments::AssignmentService;
pub use self::attendance::AttendanceService;
pub use self::course_groups::CourseGroupService;
pub use self::courses::CourseService;
pub use self::reference::ReferenceService;
pub use self::schedules::ScheduleService;
pub use self::student_groups::StudentGroupService;
pub use self::study_programs::StudyProgramService;
