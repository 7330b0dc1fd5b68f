//! # DelPresence Models
//!
//! DTOs exchanged with the DelPresence backend, strongly typed ids, and the
//! form validation run before any write request is sent.
//!
//! # Modules
//!
//! - [`ids`]: numeric id newtypes
//! - [`value_types`]: enumerated values (degree, term, day, attendance type, ...)
//! - [`study_programs`]: study programs, faculties, lecturers
//! - [`reference`]: academic years and rooms
//! - [`courses`]: courses
//! - [`course_groups`]: course groups and their derived semester range and credits
//! - [`assignments`]: lecturer assignments
//! - [`schedules`]: class schedules and conflict checks
//! - [`student_groups`]: student groups, students, batch membership
//! - [`attendance`]: attendance sessions
//!
//! # Example
//!
//! ```ignore
//! use delpresence_models::courses::CreateCourseDto;
//! use validator::Validate;
//!
//! dto.validate()?; // rejects sks outside 1..=6 before any request
//! ```

pub mod assignments;
pub mod attendance;
pub mod course_groups;
pub mod courses;
pub mod ids;
pub mod reference;
pub mod schedules;
pub mod student_groups;
pub mod study_programs;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use assignments::{CreateAssignmentDto, LecturerAssignment, UpdateAssignmentDto};
pub use attendance::{AttendanceSession, CreateSessionDto};
pub use course_groups::{CourseGroup, CreateCourseGroupDto, SemesterRange, UpdateCourseGroupDto};
pub use courses::{Course, CreateCourseDto, UpdateCourseDto};
pub use reference::{AcademicYear, Room};
pub use schedules::{
    ConflictCheckRequest, ConflictCheckResponse, ConflictType, CourseSchedule, CreateScheduleDto,
    ScheduleConflict, UpdateScheduleDto,
};
pub use student_groups::{
    AddMemberDto, BatchMembersDto, BatchMembersResponse, CreateStudentGroupDto, Student,
    StudentGroup, UpdateStudentGroupDto,
};
pub use study_programs::{
    CreateStudyProgramDto, Faculty, Lecturer, StudyProgram, UpdateStudyProgramDto,
};
pub use value_types::{AttendanceType, CourseType, Day, Degree, SessionStatus, Term};
