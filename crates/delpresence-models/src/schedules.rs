//! Weekly class schedules and the conflict-check exchange.
//!
//! Whether two schedules clash (same room, lecturer or student group at an
//! overlapping time) is decided by the backend; the client only sends the
//! candidate slot and renders the answer.

use crate::ids::{
    AcademicYearId, CourseId, DepartmentId, RoomId, ScheduleId, StudentGroupId, UserId,
    validate_id,
};
use crate::value_types::Day;
use chrono::NaiveTime;
use delpresence_core::serde::{empty_string_as_none, null_as_default};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSchedule {
    pub id: ScheduleId,
    pub course_id: CourseId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub course_name: Option<String>,
    #[serde(default)]
    pub semester: Option<u8>,
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department_name: Option<String>,
    pub day: Day,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub room_id: RoomId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub room_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub building: Option<String>,
    /// Lecturer's user account id
    pub lecturer_id: UserId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub lecturer_name: Option<String>,
    pub student_group_id: StudentGroupId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub student_group_name: Option<String>,
    pub academic_year_id: AcademicYearId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub academic_year_name: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl CourseSchedule {
    /// "08:00 - 10:30"
    #[must_use]
    pub fn time_slot(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Sort key: day of week, then start time.
    #[must_use]
    pub fn week_order(&self) -> (Day, Option<NaiveTime>) {
        (self.day, parse_time(&self.start_time))
    }
}

/// Parses "HH:MM" (seconds are accepted and ignored).
#[must_use]
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

fn validate_time_range(dto: &CreateScheduleDto) -> Result<(), ValidationError> {
    let start = parse_time(&dto.start_time).ok_or_else(|| {
        ValidationError::new("start_time").with_message("Jam mulai harus berformat HH:MM".into())
    })?;
    let end = parse_time(&dto.end_time).ok_or_else(|| {
        ValidationError::new("end_time").with_message("Jam selesai harus berformat HH:MM".into())
    })?;
    if start >= end {
        return Err(ValidationError::new("time_range")
            .with_message("Jam mulai harus sebelum jam selesai".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_time_range"))]
pub struct CreateScheduleDto {
    #[validate(custom(function = "validate_id"))]
    pub course_id: CourseId,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
    #[validate(custom(function = "validate_id"))]
    pub room_id: RoomId,
    #[validate(custom(function = "validate_id"))]
    pub lecturer_id: UserId,
    #[validate(custom(function = "validate_id"))]
    pub student_group_id: StudentGroupId,
    #[validate(custom(function = "validate_id"))]
    pub academic_year_id: AcademicYearId,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Kapasitas minimal 1"))]
    pub capacity: Option<u32>,
}

/// Partial update; unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateScheduleDto {
    pub course_id: Option<CourseId>,
    pub day: Option<Day>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub room_id: Option<RoomId>,
    pub lecturer_id: Option<UserId>,
    pub student_group_id: Option<StudentGroupId>,
    pub academic_year_id: Option<AcademicYearId>,
    pub capacity: Option<u32>,
}

impl UpdateScheduleDto {
    #[must_use]
    pub fn merge_into(self, existing: &CourseSchedule) -> CreateScheduleDto {
        CreateScheduleDto {
            course_id: self.course_id.unwrap_or(existing.course_id),
            day: self.day.unwrap_or(existing.day),
            start_time: self.start_time.unwrap_or_else(|| existing.start_time.clone()),
            end_time: self.end_time.unwrap_or_else(|| existing.end_time.clone()),
            room_id: self.room_id.unwrap_or(existing.room_id),
            lecturer_id: self.lecturer_id.unwrap_or(existing.lecturer_id),
            student_group_id: self.student_group_id.unwrap_or(existing.student_group_id),
            academic_year_id: self.academic_year_id.unwrap_or(existing.academic_year_id),
            capacity: self.capacity.or(existing.capacity),
        }
    }
}

/// Candidate slot sent to `POST /api/admin/schedules/check-conflicts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheckRequest {
    pub room_id: RoomId,
    pub lecturer_id: UserId,
    pub student_group_id: StudentGroupId,
    pub academic_year_id: AcademicYearId,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
    /// The schedule being edited, so it does not conflict with itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_id: Option<ScheduleId>,
}

impl ConflictCheckRequest {
    #[must_use]
    pub fn for_schedule(dto: &CreateScheduleDto, exclude_id: Option<ScheduleId>) -> Self {
        Self {
            room_id: dto.room_id,
            lecturer_id: dto.lecturer_id,
            student_group_id: dto.student_group_id,
            academic_year_id: dto.academic_year_id,
            day: dto.day,
            start_time: dto.start_time.clone(),
            end_time: dto.end_time.clone(),
            exclude_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    Room,
    Lecturer,
    StudentGroup,
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => f.write_str("Ruangan"),
            Self::Lecturer => f.write_str("Dosen"),
            Self::StudentGroup => f.write_str("Kelompok mahasiswa"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConflict {
    pub conflict_type: ConflictType,
    #[serde(default)]
    pub schedule_id: Option<ScheduleId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub course_name: Option<String>,
    #[serde(default)]
    pub day: Option<Day>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conflicts: Vec<ScheduleConflict>,
}

impl ConflictCheckResponse {
    #[must_use]
    pub fn of_type(&self, kind: ConflictType) -> Vec<&ScheduleConflict> {
        self.conflicts
            .iter()
            .filter(|c| c.conflict_type == kind)
            .collect()
    }
}
