//! Read-only reference data used to fill form selectors.

use chrono::Local;
use delpresence_core::ApiError;
use delpresence_models::reference::{AcademicYear, Room, current_academic_year};
use tracing::instrument;

use crate::client::ApiClient;

const ACADEMIC_YEARS: &str = "/api/admin/academic-years";
const ROOMS: &str = "/api/admin/rooms";

pub struct ReferenceService;

impl ReferenceService {
    #[instrument(skip(client))]
    pub async fn academic_years(client: &ApiClient) -> Result<Vec<AcademicYear>, ApiError> {
        client.get_list(ACADEMIC_YEARS).await
    }

    /// The academic year flagged active, else the one containing today.
    #[instrument(skip(client))]
    pub async fn current_academic_year(
        client: &ApiClient,
    ) -> Result<Option<AcademicYear>, ApiError> {
        let years = Self::academic_years(client).await?;
        let today = Local::now().date_naive();
        Ok(current_academic_year(&years, today).cloned())
    }

    #[instrument(skip(client))]
    pub async fn rooms(client: &ApiClient) -> Result<Vec<Room>, ApiError> {
        let mut rooms: Vec<Room> = client.get_list(ROOMS).await?;
        rooms.sort_by(|a, b| a.building.cmp(&b.building).then_with(|| a.code.cmp(&b.code)));
        Ok(rooms)
    }
}
