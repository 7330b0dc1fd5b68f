use delpresence_core::ApiError;
use delpresence_models::courses::{Course, CreateCourseDto, UpdateCourseDto};
use delpresence_models::ids::{AcademicYearId, CourseId};
use tracing::{info, instrument};
use validator::Validate;

use crate::client::ApiClient;

const COURSES: &str = "/api/admin/courses";

/// Query parameter narrowing a list to one academic year.
pub(crate) fn academic_year_query(id: Option<AcademicYearId>) -> Vec<(&'static str, String)> {
    id.map(|id| vec![("academic_year_id", id.to_string())])
        .unwrap_or_default()
}

pub struct CourseService;

impl CourseService {
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        academic_year_id: Option<AcademicYearId>,
    ) -> Result<Vec<Course>, ApiError> {
        client
            .get_list_with(COURSES, &academic_year_query(academic_year_id))
            .await
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: CourseId) -> Result<Course, ApiError> {
        client.get(&format!("{COURSES}/{id}")).await
    }

    #[instrument(skip(client))]
    pub async fn create(client: &ApiClient, dto: CreateCourseDto) -> Result<Course, ApiError> {
        dto.validate()?;
        let course: Course = client.post(COURSES, &dto).await?;
        info!(course.id = %course.id, code = %course.code, "Course created");
        Ok(course)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: CourseId,
        dto: UpdateCourseDto,
    ) -> Result<Course, ApiError> {
        let existing = Self::get(client, id).await?;
        let body = dto.merge_into(&existing);
        body.validate()?;

        let course: Course = client.put(&format!("{COURSES}/{id}"), &body).await?;
        info!(course.id = %id, "Course updated");
        Ok(course)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: CourseId) -> Result<(), ApiError> {
        client.delete(&format!("{COURSES}/{id}")).await?;
        info!(course.id = %id, "Course deleted");
        Ok(())
    }
}
