use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::{
    domain::entities::OwnerId,
    ports::incoming::use_cases::{CloseVacancyError, CloseVacancyUseCase},
    ports::outgoing::{VacancyRepository, VacancyRepositoryError},
};

/// Closing delegates ownership resolution entirely to the repository; unlike
/// opening there is no capability lookup here. The store answers `NotOwned`
/// for a foreign vacancy and that answer is final.
#[derive(Debug, Clone)]
pub struct CloseVacancyService<R>
where
    R: VacancyRepository,
{
    repository: R,
}

impl<R> CloseVacancyService<R>
where
    R: VacancyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CloseVacancyUseCase for CloseVacancyService<R>
where
    R: VacancyRepository + Send + Sync,
{
    async fn execute(&self, vacancy_id: Uuid, owner: OwnerId) -> Result<(), CloseVacancyError> {
        self.repository
            .delete_by_id(vacancy_id, owner)
            .await
            .map_err(|e| match e {
                VacancyRepositoryError::VacancyNotFound => CloseVacancyError::VacancyNotFound,
                VacancyRepositoryError::NotOwned => CloseVacancyError::NotOwned,
                VacancyRepositoryError::DatabaseError(msg) => {
                    CloseVacancyError::RepositoryError(msg)
                }
            })
    }
}
