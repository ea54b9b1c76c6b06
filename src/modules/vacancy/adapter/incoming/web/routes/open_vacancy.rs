use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    vacancy::application::domain::entities::OwnerId,
    vacancy::application::ports::incoming::use_cases::{OpenVacancyCommand, OpenVacancyError},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Form payload for opening a vacancy. There is no id and no timestamp field
/// on purpose: both are generated server-side.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OpenVacancyRequest {
    /// Numeric id of the user opening the vacancy
    #[schema(example = 42)]
    pub owner_user_id: u64,

    /// Vacancy title
    #[schema(example = "Backend Engineer")]
    pub title: String,

    /// Full description
    pub description: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Open a new vacancy
///
/// Requires the vacancy-management capability for `owner_user_id`;
/// answers 403 without it.
#[utoipa::path(
    post,
    path = "/api/vacancies",
    tag = "vacancies",
    request_body(content = OpenVacancyRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Vacancy created, no body"),
        (
            status = 403,
            description = "User may not manage vacancies",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MANAGEMENT_NOT_PERMITTED",
                    "message": "User is not permitted to manage vacancies"
                }
            })
        ),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
#[post("/api/vacancies")]
pub async fn open_vacancy_handler(
    data: web::Data<AppState>,
    payload: web::Form<OpenVacancyRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let owner = OwnerId::from(payload.owner_user_id);

    let command = OpenVacancyCommand::new(owner, payload.title, payload.description);

    match data.open_vacancy_use_case.execute(command).await {
        Ok(id) => {
            debug!(vacancy_id = %id, owner = %owner, "Opened new vacancy");
            ApiResponse::created_no_body()
        }

        Err(err) => map_open_vacancy_error(err, owner),
    }
}

fn map_open_vacancy_error(err: OpenVacancyError, owner: OwnerId) -> actix_web::HttpResponse {
    match err {
        OpenVacancyError::ManagementNotPermitted => {
            warn!(owner = %owner, "Vacancy creation rejected, management not permitted");
            ApiResponse::forbidden(
                "MANAGEMENT_NOT_PERMITTED",
                "User is not permitted to manage vacancies",
            )
        }
        OpenVacancyError::PermissionCheckFailed(_) | OpenVacancyError::RepositoryError(_) => {
            ApiResponse::internal_error()
        }
    }
}
