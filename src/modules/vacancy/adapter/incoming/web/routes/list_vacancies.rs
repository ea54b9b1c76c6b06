use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    vacancy::application::ports::incoming::use_cases::ListVacanciesError,
    AppState,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VacancyHeaderResponse {
    /// Vacancy id
    pub id: Uuid,
    /// Vacancy title
    pub title: String,
}

/// List all open vacancies
///
/// Public endpoint, returns the (id, title) header of every vacancy.
#[utoipa::path(
    get,
    path = "/api/vacancies",
    tag = "vacancies",
    responses(
        (
            status = 200,
            description = "Headers of all open vacancies",
            body = inline(SuccessResponse<Vec<VacancyHeaderResponse>>)
        ),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
#[get("/api/vacancies")]
pub async fn list_vacancies_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_vacancies_use_case.execute().await {
        Ok(headers) => {
            let response = headers
                .into_iter()
                .map(|header| VacancyHeaderResponse {
                    id: header.id,
                    title: header.title,
                })
                .collect::<Vec<_>>();

            ApiResponse::success(response)
        }

        Err(err) => map_list_vacancies_error(err),
    }
}

fn map_list_vacancies_error(err: ListVacanciesError) -> actix_web::HttpResponse {
    match err {
        ListVacanciesError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}
