//! Attendance session models.
//!
//! Session lifecycle (create, close, cancel) is owned by the backend; the
//! client starts sessions, polls them and may request a close.

use crate::ids::{ScheduleId, SessionId, validate_id};
use crate::value_types::{AttendanceType, SessionStatus};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use delpresence_core::serde::{empty_string_as_none, null_as_default};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_SESSION_MINUTES: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSession {
    pub id: SessionId,
    pub course_schedule_id: ScheduleId,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub room: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_time: Option<String>,
    pub attendance_type: AttendanceType,
    pub status: SessionStatus,
    /// Length of the check-in window in minutes
    pub duration: u32,
    #[serde(default)]
    pub auto_close: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_students: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attended_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub late_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub absent_count: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

impl AttendanceSession {
    /// When the check-in window closes: `created_at + duration`.
    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::minutes(i64::from(self.duration))
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Share of enrolled students who checked in (present or late), 0-100.
    #[must_use]
    pub fn attendance_rate(&self) -> f64 {
        if self.total_students == 0 {
            return 0.0;
        }
        (f64::from(self.attended_count) + f64::from(self.late_count)) * 100.0
            / f64::from(self.total_students)
    }

    /// "IF2101 Basis Data", or the schedule id when the course is unknown.
    #[must_use]
    pub fn title(&self) -> String {
        match (&self.course_code, &self.course_name) {
            (Some(code), Some(name)) => format!("{code} {name}"),
            (None, Some(name)) => name.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => format!("Jadwal #{}", self.course_schedule_id),
        }
    }
}

/// Body of `POST /lecturer/attendance/sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateSessionDto {
    #[validate(custom(function = "validate_id"))]
    pub course_schedule_id: ScheduleId,
    pub attendance_type: AttendanceType,
    #[validate(range(min = 1, max = 240, message = "Durasi harus antara 1 dan 240 menit"))]
    pub duration: u32,
    pub auto_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Catatan maksimal 500 karakter"))]
    pub notes: Option<String>,
}
