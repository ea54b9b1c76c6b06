use async_trait::async_trait;

use crate::vacancy::application::ports::outgoing::VacancyHeader;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListVacanciesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListVacanciesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<VacancyHeader>, ListVacanciesError>;
}
