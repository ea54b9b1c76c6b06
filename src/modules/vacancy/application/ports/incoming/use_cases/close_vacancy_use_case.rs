use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::domain::entities::OwnerId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CloseVacancyError {
    #[error("Vacancy not found")]
    VacancyNotFound,

    #[error("Vacancy is owned by another user")]
    NotOwned,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CloseVacancyUseCase: Send + Sync {
    async fn execute(&self, vacancy_id: Uuid, owner: OwnerId) -> Result<(), CloseVacancyError>;
}
