use delpresence_core::ApiError;
use delpresence_models::ids::{LecturerId, StudyProgramId};
use delpresence_models::study_programs::{
    CreateStudyProgramDto, Faculty, Lecturer, StudyProgram, UpdateStudyProgramDto,
};
use tracing::{info, instrument};
use validator::Validate;

use crate::client::ApiClient;

const STUDY_PROGRAMS: &str = "/api/admin/study-programs";
const FACULTIES: &str = "/api/admin/faculties";
const LECTURERS: &str = "/api/admin/lecturers";

pub struct StudyProgramService;

impl StudyProgramService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<StudyProgram>, ApiError> {
        client.get_list(STUDY_PROGRAMS).await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: StudyProgramId) -> Result<StudyProgram, ApiError> {
        client.get(&format!("{STUDY_PROGRAMS}/{id}")).await
    }

    #[instrument(skip(client))]
    pub async fn create(
        client: &ApiClient,
        dto: CreateStudyProgramDto,
    ) -> Result<StudyProgram, ApiError> {
        dto.validate()?;
        let program: StudyProgram = client.post(STUDY_PROGRAMS, &dto).await?;
        info!(study_program.id = %program.id, code = %program.code, "Study program created");
        Ok(program)
    }

    /// Fetches the current record, applies the changes and sends the full body.
    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: StudyProgramId,
        dto: UpdateStudyProgramDto,
    ) -> Result<StudyProgram, ApiError> {
        dto.validate()?;
        let existing = Self::get(client, id).await?;
        let body = dto.merge_into(&existing).map_err(ApiError::parse)?;
        body.validate()?;

        let program: StudyProgram = client.put(&format!("{STUDY_PROGRAMS}/{id}"), &body).await?;
        info!(study_program.id = %id, "Study program updated");
        Ok(program)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: StudyProgramId) -> Result<(), ApiError> {
        client.delete(&format!("{STUDY_PROGRAMS}/{id}")).await?;
        info!(study_program.id = %id, "Study program deleted");
        Ok(())
    }

    #[instrument(skip(client))]
    pub async fn list_faculties(client: &ApiClient) -> Result<Vec<Faculty>, ApiError> {
        client.get_list(FACULTIES).await
    }

    /// Searches lecturers by name or NIP; used to pick a head of department.
    #[instrument(skip(client))]
    pub async fn search_lecturers(
        client: &ApiClient,
        query: &str,
    ) -> Result<Vec<Lecturer>, ApiError> {
        client
            .get_list_with(
                &format!("{LECTURERS}/search"),
                &[("query", query.trim().to_string())],
            )
            .await
    }

    #[instrument(skip(client))]
    pub async fn get_lecturer(client: &ApiClient, id: LecturerId) -> Result<Lecturer, ApiError> {
        client.get(&format!("{LECTURERS}/{id}")).await
    }
}
