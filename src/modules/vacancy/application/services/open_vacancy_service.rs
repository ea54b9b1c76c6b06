use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::{
    domain::entities::Vacancy,
    ports::incoming::use_cases::{OpenVacancyCommand, OpenVacancyError, OpenVacancyUseCase},
    ports::outgoing::{PermissionQuery, VacancyRepository},
};

#[derive(Debug, Clone)]
pub struct OpenVacancyService<P, R>
where
    P: PermissionQuery,
    R: VacancyRepository,
{
    permissions: P,
    repository: R,
}

impl<P, R> OpenVacancyService<P, R>
where
    P: PermissionQuery,
    R: VacancyRepository,
{
    pub fn new(permissions: P, repository: R) -> Self {
        Self {
            permissions,
            repository,
        }
    }
}

#[async_trait]
impl<P, R> OpenVacancyUseCase for OpenVacancyService<P, R>
where
    P: PermissionQuery + Send + Sync,
    R: VacancyRepository + Send + Sync,
{
    async fn execute(&self, command: OpenVacancyCommand) -> Result<Uuid, OpenVacancyError> {
        // 1. Capability check before anything is built or persisted
        let allowed = self
            .permissions
            .can_manage_vacancies(command.owner())
            .await
            .map_err(|e| OpenVacancyError::PermissionCheckFailed(e.to_string()))?;

        if !allowed {
            return Err(OpenVacancyError::ManagementNotPermitted);
        }

        // 2. Build the aggregate; id and created are assigned here, server-side
        let (owner, title, description) = command.into_parts();
        let vacancy = Vacancy::open(owner, title, description);

        // 3. Persist
        self.repository
            .add_vacancy(&vacancy)
            .await
            .map_err(|e| OpenVacancyError::RepositoryError(e.to_string()))?;

        Ok(vacancy.id())
    }
}
