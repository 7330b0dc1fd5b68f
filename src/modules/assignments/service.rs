use delpresence_core::ApiError;
use delpresence_models::assignments::{
    CreateAssignmentDto, LecturerAssignment, UpdateAssignmentDto,
};
use delpresence_models::ids::{AcademicYearId, AssignmentId};
use tracing::{info, instrument};
use validator::Validate;

use crate::client::ApiClient;
use crate::modules::courses::service::academic_year_query;

const ASSIGNMENTS: &str = "/api/admin/courses/assignments";

pub struct AssignmentService;

impl AssignmentService {
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        academic_year_id: Option<AcademicYearId>,
    ) -> Result<Vec<LecturerAssignment>, ApiError> {
        client
            .get_list_with(ASSIGNMENTS, &academic_year_query(academic_year_id))
            .await
    }

    #[instrument(skip(client))]
    pub async fn get(
        client: &ApiClient,
        id: AssignmentId,
    ) -> Result<LecturerAssignment, ApiError> {
        client.get(&format!("{ASSIGNMENTS}/{id}")).await
    }

    #[instrument(skip(client))]
    pub async fn create(
        client: &ApiClient,
        dto: CreateAssignmentDto,
    ) -> Result<LecturerAssignment, ApiError> {
        dto.validate()?;
        let assignment: LecturerAssignment = client.post(ASSIGNMENTS, &dto).await?;
        info!(
            assignment.id = %assignment.id,
            lecturer = %dto.user_id,
            course = %dto.course_id,
            "Lecturer assigned to course"
        );
        Ok(assignment)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: AssignmentId,
        dto: UpdateAssignmentDto,
    ) -> Result<LecturerAssignment, ApiError> {
        let existing = Self::get(client, id).await?;
        let body = dto.merge_into(&existing);
        body.validate()?;

        let assignment: LecturerAssignment =
            client.put(&format!("{ASSIGNMENTS}/{id}"), &body).await?;
        info!(assignment.id = %id, "Lecturer assignment updated");
        Ok(assignment)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: AssignmentId) -> Result<(), ApiError> {
        client.delete(&format!("{ASSIGNMENTS}/{id}")).await?;
        info!(assignment.id = %id, "Lecturer assignment removed");
        Ok(())
    }
}
