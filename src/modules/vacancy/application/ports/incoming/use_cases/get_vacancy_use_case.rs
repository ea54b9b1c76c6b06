use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::ports::outgoing::VacancyRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetVacancyError {
    #[error("Vacancy not found")]
    VacancyNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetVacancyUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<VacancyRecord, GetVacancyError>;
}
