pub mod sea_orm_entity;
mod permission_query_postgres;
mod vacancy_query_postgres;
mod vacancy_repository_postgres;

pub use permission_query_postgres::PermissionQueryPostgres;
pub use vacancy_query_postgres::VacancyQueryPostgres;
pub use vacancy_repository_postgres::VacancyRepositoryPostgres;
