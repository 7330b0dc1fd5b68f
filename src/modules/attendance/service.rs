use chrono::{Datelike, Local};
use delpresence_core::ApiError;
use delpresence_models::attendance::{AttendanceSession, CreateSessionDto};
use delpresence_models::ids::SessionId;
use delpresence_models::schedules::CourseSchedule;
use delpresence_models::value_types::Day;
use tracing::{info, instrument};
use validator::Validate;

use crate::client::ApiClient;
use crate::modules::schedules::sort_by_week;

const LECTURER_SCHEDULES: &str = "/lecturer/schedules";
const SESSIONS: &str = "/lecturer/attendance/sessions";

pub struct AttendanceService;

impl AttendanceService {
    /// Schedules taught by the signed-in lecturer, in week order.
    #[instrument(skip(client))]
    pub async fn lecturer_schedules(client: &ApiClient) -> Result<Vec<CourseSchedule>, ApiError> {
        let mut schedules = client.get_list(LECTURER_SCHEDULES).await?;
        sort_by_week(&mut schedules);
        Ok(schedules)
    }

    /// The lecturer's schedules that fall on `day`.
    #[instrument(skip(client))]
    pub async fn schedules_on(
        client: &ApiClient,
        day: Day,
    ) -> Result<Vec<CourseSchedule>, ApiError> {
        let schedules = Self::lecturer_schedules(client).await?;
        Ok(schedules.into_iter().filter(|s| s.day == day).collect())
    }

    #[instrument(skip(client))]
    pub async fn today_schedules(client: &ApiClient) -> Result<Vec<CourseSchedule>, ApiError> {
        Self::schedules_on(client, Day::from_weekday(Local::now().weekday())).await
    }

    #[instrument(skip(client))]
    pub async fn start_session(
        client: &ApiClient,
        dto: CreateSessionDto,
    ) -> Result<AttendanceSession, ApiError> {
        dto.validate()?;
        let session: AttendanceSession = client.post(SESSIONS, &dto).await?;
        info!(
            session.id = %session.id,
            schedule.id = %dto.course_schedule_id,
            duration = dto.duration,
            auto_close = dto.auto_close,
            "Attendance session started"
        );
        Ok(session)
    }

    #[instrument(skip(client))]
    pub async fn active_sessions(client: &ApiClient) -> Result<Vec<AttendanceSession>, ApiError> {
        client.get_list(&format!("{SESSIONS}/active")).await
    }

    #[instrument(skip(client))]
    pub async fn get_session(
        client: &ApiClient,
        id: SessionId,
    ) -> Result<AttendanceSession, ApiError> {
        client.get(&format!("{SESSIONS}/{id}")).await
    }

    /// Asks the backend to close a session; the backend decides the final state.
    #[instrument(skip(client))]
    pub async fn close_session(
        client: &ApiClient,
        id: SessionId,
    ) -> Result<Option<AttendanceSession>, ApiError> {
        let session = client.put_empty(&format!("{SESSIONS}/{id}/close")).await?;
        info!(session.id = %id, "Attendance session closed");
        Ok(session)
    }
}
