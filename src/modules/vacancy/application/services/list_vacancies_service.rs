use async_trait::async_trait;

use crate::vacancy::application::{
    ports::incoming::use_cases::{ListVacanciesError, ListVacanciesUseCase},
    ports::outgoing::{VacancyHeader, VacancyQuery},
};

#[derive(Debug, Clone)]
pub struct ListVacanciesService<Q>
where
    Q: VacancyQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListVacanciesService<Q>
where
    Q: VacancyQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListVacanciesUseCase for ListVacanciesService<Q>
where
    Q: VacancyQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<VacancyHeader>, ListVacanciesError> {
        self.query
            .list_all_headers()
            .await
            .map_err(|e| ListVacanciesError::QueryFailed(e.to_string()))
    }
}
