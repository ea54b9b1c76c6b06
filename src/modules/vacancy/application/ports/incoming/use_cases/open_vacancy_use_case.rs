use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::domain::entities::OwnerId;

//
// ──────────────────────────────────────────────────────────
// Open Vacancy Command
// ──────────────────────────────────────────────────────────
//

/// Input for opening a vacancy. Deliberately carries no id and no timestamp:
/// both are assigned server-side when the vacancy aggregate is built.
#[derive(Debug, Clone)]
pub struct OpenVacancyCommand {
    owner: OwnerId,
    title: String,
    description: String,
}

impl OpenVacancyCommand {
    pub fn new(owner: OwnerId, title: String, description: String) -> Self {
        Self {
            owner,
            title,
            description,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_parts(self) -> (OwnerId, String, String) {
        (self.owner, self.title, self.description)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum OpenVacancyError {
    #[error("User is not permitted to manage vacancies")]
    ManagementNotPermitted,

    #[error("Permission check failed: {0}")]
    PermissionCheckFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait OpenVacancyUseCase: Send + Sync {
    /// Returns the id of the newly opened vacancy.
    async fn execute(&self, command: OpenVacancyCommand) -> Result<Uuid, OpenVacancyError>;
}
