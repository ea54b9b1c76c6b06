mod permission_query;
mod vacancy_query;
mod vacancy_repository;

pub use permission_query::{PermissionQuery, PermissionQueryError};
pub use vacancy_query::{VacancyHeader, VacancyQuery, VacancyQueryError, VacancyRecord};
pub use vacancy_repository::{VacancyRepository, VacancyRepositoryError};
