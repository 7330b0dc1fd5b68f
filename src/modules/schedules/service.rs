use delpresence_core::ApiError;
use delpresence_models::ids::{AcademicYearId, ScheduleId};
use delpresence_models::schedules::{
    ConflictCheckRequest, ConflictCheckResponse, CourseSchedule, CreateScheduleDto,
    UpdateScheduleDto,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::client::ApiClient;
use crate::modules::courses::service::academic_year_query;

const SCHEDULES: &str = "/api/admin/schedules";

/// Orders schedules Monday to Sunday, then by start time.
pub fn sort_by_week(schedules: &mut [CourseSchedule]) {
    schedules.sort_by_key(CourseSchedule::week_order);
}

/// Folds a positive conflict check into a 409 error carrying every conflict.
fn conflict_error(response: &ConflictCheckResponse) -> ApiError {
    let details: Vec<String> = response
        .conflicts
        .iter()
        .map(|c| match &c.message {
            Some(message) => format!("{}: {message}", c.conflict_type),
            None => c.conflict_type.to_string(),
        })
        .collect();
    ApiError::api(409, format!("schedule conflict ({})", details.join("; ")))
}

pub struct ScheduleService;

impl ScheduleService {
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        academic_year_id: Option<AcademicYearId>,
    ) -> Result<Vec<CourseSchedule>, ApiError> {
        let mut schedules = client
            .get_list_with(SCHEDULES, &academic_year_query(academic_year_id))
            .await?;
        sort_by_week(&mut schedules);
        Ok(schedules)
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: ScheduleId) -> Result<CourseSchedule, ApiError> {
        client.get(&format!("{SCHEDULES}/{id}")).await
    }

    /// Asks the backend whether a slot collides on room, lecturer or student group.
    #[instrument(skip(client))]
    pub async fn check_conflicts(
        client: &ApiClient,
        request: &ConflictCheckRequest,
    ) -> Result<ConflictCheckResponse, ApiError> {
        let response: ConflictCheckResponse = client
            .post_optional(&format!("{SCHEDULES}/check-conflicts"), request)
            .await?
            .unwrap_or_default();
        if response.has_conflict {
            warn!(conflicts = response.conflicts.len(), "Schedule conflict detected");
        }
        Ok(response)
    }

    #[instrument(skip(client))]
    pub async fn create(
        client: &ApiClient,
        dto: CreateScheduleDto,
    ) -> Result<CourseSchedule, ApiError> {
        dto.validate()?;
        let schedule: CourseSchedule = client.post(SCHEDULES, &dto).await?;
        info!(schedule.id = %schedule.id, day = %schedule.day, "Schedule created");
        Ok(schedule)
    }

    /// Runs the conflict check first and only creates the schedule when the
    /// slot is free.
    #[instrument(skip(client))]
    pub async fn create_checked(
        client: &ApiClient,
        dto: CreateScheduleDto,
    ) -> Result<CourseSchedule, ApiError> {
        dto.validate()?;
        let check = Self::check_conflicts(client, &ConflictCheckRequest::for_schedule(&dto, None))
            .await?;
        if check.has_conflict {
            return Err(conflict_error(&check));
        }
        Self::create(client, dto).await
    }

    /// Merges the changes and, unless `skip_conflict_check` is set, checks the
    /// resulting slot against every other schedule before saving.
    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: ScheduleId,
        dto: UpdateScheduleDto,
        skip_conflict_check: bool,
    ) -> Result<CourseSchedule, ApiError> {
        let existing = Self::get(client, id).await?;
        let body = dto.merge_into(&existing);
        body.validate()?;

        if !skip_conflict_check {
            let check =
                Self::check_conflicts(client, &ConflictCheckRequest::for_schedule(&body, Some(id)))
                    .await?;
            if check.has_conflict {
                return Err(conflict_error(&check));
            }
        }

        let schedule: CourseSchedule = client.put(&format!("{SCHEDULES}/{id}"), &body).await?;
        info!(schedule.id = %id, "Schedule updated");
        Ok(schedule)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: ScheduleId) -> Result<(), ApiError> {
        client.delete(&format!("{SCHEDULES}/{id}")).await?;
        info!(schedule.id = %id, "Schedule deleted");
        Ok(())
    }
}
