use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::domain::entities::{OwnerId, Vacancy};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VacancyRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Vacancy not found")]
    VacancyNotFound,

    #[error("Vacancy is owned by another user")]
    NotOwned,
}

/// Write side of vacancy persistence.
///
/// The store is the authority on ownership: `delete_by_id` receives the
/// caller's claimed owner id and answers `NotOwned` itself. The application
/// layer performs no separate ownership check for deletion.
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    async fn add_vacancy(&self, vacancy: &Vacancy) -> Result<(), VacancyRepositoryError>;

    async fn delete_by_id(
        &self,
        vacancy_id: Uuid,
        owner: OwnerId,
    ) -> Result<(), VacancyRepositoryError>;
}
