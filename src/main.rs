pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::vacancy;

use crate::api::openapi::ApiDoc;
use crate::vacancy::adapter::outgoing::{
    PermissionQueryPostgres, VacancyQueryPostgres, VacancyRepositoryPostgres,
};
use crate::vacancy::application::ports::incoming::use_cases::{
    CloseVacancyUseCase, GetVacancyUseCase, ListVacanciesUseCase, OpenVacancyUseCase,
};
use crate::vacancy::application::services::{
    CloseVacancyService, GetVacancyService, ListVacanciesService, OpenVacancyService,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_vacancies_use_case: Arc<dyn ListVacanciesUseCase + Send + Sync>,
    pub get_vacancy_use_case: Arc<dyn GetVacancyUseCase + Send + Sync>,
    pub open_vacancy_use_case: Arc<dyn OpenVacancyUseCase + Send + Sync>,
    pub close_vacancy_use_case: Arc<dyn CloseVacancyUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Create adapters and use cases
    let vacancy_query = VacancyQueryPostgres::new(Arc::clone(&db_arc));
    let vacancy_repo = VacancyRepositoryPostgres::new(Arc::clone(&db_arc));
    let permission_query = PermissionQueryPostgres::new(Arc::clone(&db_arc));

    let list_vacancies_use_case = ListVacanciesService::new(vacancy_query.clone());
    let get_vacancy_use_case = GetVacancyService::new(vacancy_query);
    let open_vacancy_use_case = OpenVacancyService::new(permission_query, vacancy_repo.clone());
    let close_vacancy_use_case = CloseVacancyService::new(vacancy_repo);

    let state = AppState {
        list_vacancies_use_case: Arc::new(list_vacancies_use_case),
        get_vacancy_use_case: Arc::new(get_vacancy_use_case),
        open_vacancy_use_case: Arc::new(open_vacancy_use_case),
        close_vacancy_use_case: Arc::new(close_vacancy_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Vacancies
    cfg.service(crate::vacancy::adapter::incoming::web::routes::list_vacancies_handler);
    cfg.service(crate::vacancy::adapter::incoming::web::routes::get_vacancy_handler);
    cfg.service(crate::vacancy::adapter::incoming::web::routes::open_vacancy_handler);
    cfg.service(crate::vacancy::adapter::incoming::web::routes::close_vacancy_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
