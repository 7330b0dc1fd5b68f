use delpresence_core::ApiError;
use delpresence_models::ids::{DepartmentId, StudentGroupId, StudentId};
use delpresence_models::student_groups::{
    AddMemberDto, BatchMembersDto, BatchMembersResponse, CreateStudentGroupDto, Student,
    StudentGroup, UpdateStudentGroupDto,
};
use tracing::{Instrument, info, instrument, warn};
use validator::Validate;

use crate::business_span;
use crate::client::ApiClient;
use crate::modules::student_groups::roster::MemberRoster;
use crate::utils::tracing::{record_error, record_success};

const STUDENT_GROUPS: &str = "/api/admin/student-groups";

fn department_query(id: Option<DepartmentId>) -> Vec<(&'static str, String)> {
    id.map(|id| vec![("department_id", id.to_string())])
        .unwrap_or_default()
}

pub struct StudentGroupService;

impl StudentGroupService {
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        department_id: Option<DepartmentId>,
    ) -> Result<Vec<StudentGroup>, ApiError> {
        client
            .get_list_with(STUDENT_GROUPS, &department_query(department_id))
            .await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: StudentGroupId) -> Result<StudentGroup, ApiError> {
        client.get(&format!("{STUDENT_GROUPS}/{id}")).await
    }

    #[instrument(skip(client))]
    pub async fn create(
        client: &ApiClient,
        dto: CreateStudentGroupDto,
    ) -> Result<StudentGroup, ApiError> {
        dto.validate()?;
        let group: StudentGroup = client.post(STUDENT_GROUPS, &dto).await?;
        info!(student_group.id = %group.id, "Student group created");
        Ok(group)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: StudentGroupId,
        dto: UpdateStudentGroupDto,
    ) -> Result<StudentGroup, ApiError> {
        let existing = Self::get(client, id).await?;
        let body = dto.merge_into(&existing);
        body.validate()?;

        let group: StudentGroup = client.put(&format!("{STUDENT_GROUPS}/{id}"), &body).await?;
        info!(student_group.id = %id, "Student group updated");
        Ok(group)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: StudentGroupId) -> Result<(), ApiError> {
        client.delete(&format!("{STUDENT_GROUPS}/{id}")).await?;
        info!(student_group.id = %id, "Student group deleted");
        Ok(())
    }

    #[instrument(skip(client))]
    pub async fn members(
        client: &ApiClient,
        id: StudentGroupId,
    ) -> Result<Vec<Student>, ApiError> {
        client
            .get_list(&format!("{STUDENT_GROUPS}/{id}/members"))
            .await
    }

    /// Students that may still join the group.
    #[instrument(skip(client))]
    pub async fn available_students(
        client: &ApiClient,
        id: StudentGroupId,
    ) -> Result<Vec<Student>, ApiError> {
        client
            .get_list(&format!("{STUDENT_GROUPS}/{id}/available-students"))
            .await
    }

    /// Fetches members and available students together.
    #[instrument(skip(client))]
    pub async fn load_roster(
        client: &ApiClient,
        id: StudentGroupId,
    ) -> Result<MemberRoster, ApiError> {
        let (members, available) = tokio::try_join!(
            Self::members(client, id),
            Self::available_students(client, id)
        )?;
        Ok(MemberRoster::new(members, available))
    }

    #[instrument(skip(client))]
    pub async fn add_member(
        client: &ApiClient,
        id: StudentGroupId,
        student_id: StudentId,
    ) -> Result<(), ApiError> {
        let dto = AddMemberDto { student_id };
        dto.validate()?;
        client
            .post_unit(&format!("{STUDENT_GROUPS}/{id}/members"), &dto)
            .await?;
        info!(student_group.id = %id, student.id = %student_id, "Student added to group");
        Ok(())
    }

    /// Adds students in one request, moving them in `roster` first.
    ///
    /// Ids that are not on the available side are ignored. On failure the
    /// roster is restored; students the backend reports as failed are moved
    /// back to the available side.
    pub async fn add_members(
        client: &ApiClient,
        id: StudentGroupId,
        roster: &mut MemberRoster,
        student_ids: &[StudentId],
    ) -> Result<BatchMembersResponse, ApiError> {
        let dto = BatchMembersDto {
            student_ids: roster.addable(student_ids),
        };
        dto.validate()?;

        let span = business_span!("student_group.add_members", student_group.id = %id);
        async {
            let snapshot = roster.add(&dto.student_ids);
            let result = client
                .post_optional::<_, BatchMembersResponse>(
                    &format!("{STUDENT_GROUPS}/{id}/members/batch"),
                    &dto,
                )
                .await;

            match result {
                Ok(response) => {
                    let response = response.unwrap_or_default();
                    if !response.failed_ids.is_empty() {
                        warn!(failed = response.failed_ids.len(), "Some students were not added");
                        roster.remove(&response.failed_ids);
                    }
                    info!(requested = dto.student_ids.len(), "Students added to group");
                    record_success();
                    Ok(response)
                }
                Err(error) => {
                    warn!(%error, "Batch add failed; restoring roster");
                    roster.restore(snapshot);
                    record_error(&error.to_string());
                    Err(error)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Removes students in one request, moving them in `roster` first.
    ///
    /// Mirrors [`Self::add_members`]: unknown ids are ignored and the roster
    /// is restored when the request fails.
    pub async fn remove_members(
        client: &ApiClient,
        id: StudentGroupId,
        roster: &mut MemberRoster,
        student_ids: &[StudentId],
    ) -> Result<BatchMembersResponse, ApiError> {
        let dto = BatchMembersDto {
            student_ids: roster.removable(student_ids),
        };
        dto.validate()?;

        let span = business_span!("student_group.remove_members", student_group.id = %id);
        async {
            let snapshot = roster.remove(&dto.student_ids);
            let result = client
                .post_optional::<_, BatchMembersResponse>(
                    &format!("{STUDENT_GROUPS}/{id}/members/remove-batch"),
                    &dto,
                )
                .await;

            match result {
                Ok(response) => {
                    let response = response.unwrap_or_default();
                    if !response.failed_ids.is_empty() {
                        warn!(failed = response.failed_ids.len(), "Some students were not removed");
                        roster.add(&response.failed_ids);
                    }
                    info!(requested = dto.student_ids.len(), "Students removed from group");
                    record_success();
                    Ok(response)
                }
                Err(error) => {
                    warn!(%error, "Batch remove failed; restoring roster");
                    roster.restore(snapshot);
                    record_error(&error.to_string());
                    Err(error)
                }
            }
        }
        .instrument(span)
        .await
    }
}
