use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    vacancy::application::ports::incoming::use_cases::GetVacancyError,
    AppState,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VacancyResponse {
    /// Vacancy id
    pub id: Uuid,
    /// Numeric id of the owning user
    #[schema(example = 42)]
    pub owner_user_id: u64,
    /// Vacancy title
    pub title: String,
    /// Full description
    pub description: String,
    /// Creation timestamp (UTC, server-assigned)
    pub created: DateTime<Utc>,
}

/// Get the full description of a vacancy by id
#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    tag = "vacancies",
    params(("id" = Uuid, Path, description = "Vacancy id")),
    responses(
        (
            status = 200,
            description = "Full vacancy",
            body = inline(SuccessResponse<VacancyResponse>)
        ),
        (status = 404, description = "No vacancy with this id", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
#[get("/api/vacancies/{id}")]
pub async fn get_vacancy_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.get_vacancy_use_case.execute(id).await {
        Ok(record) => ApiResponse::success(VacancyResponse {
            id: record.id,
            owner_user_id: record.owner.value(),
            title: record.title,
            description: record.description,
            created: record.created,
        }),

        Err(err) => map_get_vacancy_error(err, id),
    }
}

fn map_get_vacancy_error(err: GetVacancyError, id: Uuid) -> actix_web::HttpResponse {
    match err {
        GetVacancyError::VacancyNotFound => {
            debug!(vacancy_id = %id, "Tried to find a vacancy but it does not exist");
            ApiResponse::not_found("VACANCY_NOT_FOUND", "Vacancy not found")
        }
        GetVacancyError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}
