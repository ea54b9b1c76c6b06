use async_trait::async_trait;

use crate::vacancy::application::domain::entities::OwnerId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PermissionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Answers whether a user holds the vacancy-management capability.
#[async_trait]
pub trait PermissionQuery: Send + Sync {
    async fn can_manage_vacancies(&self, user: OwnerId) -> Result<bool, PermissionQueryError>;
}
