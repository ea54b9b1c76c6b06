use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

// Vacancies
use crate::vacancy::adapter::incoming::web::routes::{
    OpenVacancyRequest, VacancyHeaderResponse, VacancyResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vacancy Service API",
        version = "1.0.0",
        description = "API documentation for the job vacancy service"
    ),
    paths(
        crate::vacancy::adapter::incoming::web::routes::list_vacancies_handler,
        crate::vacancy::adapter::incoming::web::routes::get_vacancy_handler,
        crate::vacancy::adapter::incoming::web::routes::open_vacancy_handler,
        crate::vacancy::adapter::incoming::web::routes::close_vacancy_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<VacancyResponse>,
            ErrorResponse,
            ErrorDetail,

            // Vacancy DTOs
            VacancyHeaderResponse,
            VacancyResponse,
            OpenVacancyRequest
        )
    ),
    tags(
        (name = "vacancies", description = "Job vacancy endpoints")
    )
)]
pub struct ApiDoc;
