use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    vacancy::application::domain::entities::OwnerId,
    vacancy::application::ports::incoming::use_cases::CloseVacancyError,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CloseVacancyQuery {
    /// Numeric id of the caller claiming ownership
    pub owner_id: u64,
}

/// Close (delete) a vacancy
///
/// The store decides ownership: a vacancy owned by another user answers 403,
/// a missing vacancy answers 404. No separate capability check happens here.
#[utoipa::path(
    delete,
    path = "/api/vacancies/{id}",
    tag = "vacancies",
    params(
        ("id" = Uuid, Path, description = "Vacancy id"),
        ("owner_id" = u64, Query, description = "Caller's claimed owner id")
    ),
    responses(
        (status = 200, description = "Vacancy deleted, no body"),
        (status = 403, description = "Vacancy owned by another user", body = ErrorResponse),
        (status = 404, description = "No vacancy with this id", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
#[delete("/api/vacancies/{id}")]
pub async fn close_vacancy_handler(
    path: web::Path<Uuid>,
    query: web::Query<CloseVacancyQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let vacancy_id = path.into_inner();
    let owner = OwnerId::from(query.owner_id);

    match data
        .close_vacancy_use_case
        .execute(vacancy_id, owner)
        .await
    {
        Ok(()) => ApiResponse::ok_no_body(),

        Err(err) => map_close_vacancy_error(err, vacancy_id),
    }
}

fn map_close_vacancy_error(err: CloseVacancyError, vacancy_id: Uuid) -> actix_web::HttpResponse {
    match err {
        CloseVacancyError::VacancyNotFound => {
            warn!(vacancy_id = %vacancy_id, "Tried to close a vacancy that does not exist");
            ApiResponse::not_found("VACANCY_NOT_FOUND", "Vacancy not found")
        }
        CloseVacancyError::NotOwned => {
            warn!(vacancy_id = %vacancy_id, "Tried to close a vacancy owned by another user");
            ApiResponse::forbidden("NOT_VACANCY_OWNER", "Vacancy is owned by another user")
        }
        CloseVacancyError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
