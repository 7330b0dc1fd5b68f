use delpresence_core::ApiError;
use delpresence_models::course_groups::{
    CourseGroup, CreateCourseGroupDto, UpdateCourseGroupDto, selected_courses,
};
use delpresence_models::courses::Course;
use delpresence_models::ids::{CourseGroupId, DepartmentId};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::client::ApiClient;
use crate::modules::courses::CourseService;

const COURSE_GROUPS: &str = "/api/admin/course-groups";

fn department_query(id: Option<DepartmentId>) -> Vec<(&'static str, String)> {
    id.map(|id| vec![("department_id", id.to_string())])
        .unwrap_or_default()
}

/// Fills `courses` from the full course list when the backend sent ids only.
pub fn resolve_courses(group: &mut CourseGroup, all_courses: &[Course]) {
    if group.courses.is_empty() && !group.course_ids.is_empty() {
        group.courses = selected_courses(all_courses, &group.course_ids);
    }
}

pub struct CourseGroupService;

impl CourseGroupService {
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        department_id: Option<DepartmentId>,
    ) -> Result<Vec<CourseGroup>, ApiError> {
        client
            .get_list_with(COURSE_GROUPS, &department_query(department_id))
            .await
    }

    /// Lists groups with their member courses resolved, so the semester range
    /// and total credits can be derived for every row.
    #[instrument(skip(client))]
    pub async fn list_with_courses(
        client: &ApiClient,
        department_id: Option<DepartmentId>,
    ) -> Result<Vec<CourseGroup>, ApiError> {
        let mut groups = Self::list(client, department_id).await?;
        if groups
            .iter()
            .any(|g| g.courses.is_empty() && !g.course_ids.is_empty())
        {
            let courses = CourseService::list(client, None).await?;
            debug!(courses = courses.len(), "Resolving course group members");
            for group in &mut groups {
                resolve_courses(group, &courses);
            }
        }
        Ok(groups)
    }

    #[instrument(skip(client))]
    pub async fn get(client: &ApiClient, id: CourseGroupId) -> Result<CourseGroup, ApiError> {
        client.get(&format!("{COURSE_GROUPS}/{id}")).await
    }

    #[instrument(skip(client))]
    pub async fn create(
        client: &ApiClient,
        dto: CreateCourseGroupDto,
    ) -> Result<CourseGroup, ApiError> {
        dto.validate()?;
        let group: CourseGroup = client.post(COURSE_GROUPS, &dto).await?;
        info!(course_group.id = %group.id, courses = dto.course_ids.len(), "Course group created");
        Ok(group)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &ApiClient,
        id: CourseGroupId,
        dto: UpdateCourseGroupDto,
    ) -> Result<CourseGroup, ApiError> {
        let existing = Self::get(client, id).await?;
        let body = dto.merge_into(&existing);
        body.validate()?;

        let group: CourseGroup = client.put(&format!("{COURSE_GROUPS}/{id}"), &body).await?;
        info!(course_group.id = %id, "Course group updated");
        Ok(group)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &ApiClient, id: CourseGroupId) -> Result<(), ApiError> {
        client.delete(&format!("{COURSE_GROUPS}/{id}")).await?;
        info!(course_group.id = %id, "Course group deleted");
        Ok(())
    }
}
