use delpresence_core::filter::{ListFilter, eq_if_set};
use delpresence_models::attendance::AttendanceSession;
use delpresence_models::value_types::{AttendanceType, SessionStatus};

#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub status: Option<SessionStatus>,
    pub attendance_type: Option<AttendanceType>,
}

impl ListFilter<AttendanceSession> for SessionFilter {
    fn matches(&self, session: &AttendanceSession) -> bool {
        eq_if_set(self.status.as_ref(), &session.status)
            && eq_if_set(self.attendance_type.as_ref(), &session.attendance_type)
    }

    fn is_cleared(&self) -> bool {
        self.status.is_none() && self.attendance_type.is_none()
    }
}
