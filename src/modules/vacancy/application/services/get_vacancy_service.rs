use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::{
    ports::incoming::use_cases::{GetVacancyError, GetVacancyUseCase},
    ports::outgoing::{VacancyQuery, VacancyQueryError, VacancyRecord},
};

#[derive(Debug, Clone)]
pub struct GetVacancyService<Q>
where
    Q: VacancyQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetVacancyService<Q>
where
    Q: VacancyQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVacancyUseCase for GetVacancyService<Q>
where
    Q: VacancyQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<VacancyRecord, GetVacancyError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            VacancyQueryError::VacancyNotFound => GetVacancyError::VacancyNotFound,
            VacancyQueryError::DatabaseError(msg) => GetVacancyError::QueryFailed(msg),
        })
    }
}
