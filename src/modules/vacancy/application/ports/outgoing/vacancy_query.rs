use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::vacancy::application::domain::entities::OwnerId;

/// Lightweight (id, title) projection used for listing.
#[derive(Debug, Clone, Serialize)]
pub struct VacancyHeader {
    pub id: Uuid,
    pub title: String,
}

/// Read-side DTO with all persisted vacancy fields.
#[derive(Debug, Clone)]
pub struct VacancyRecord {
    pub id: Uuid,
    pub owner: OwnerId,
    pub title: String,
    pub description: String,
    pub created: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VacancyQueryError {
    #[error("Vacancy not found")]
    VacancyNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VacancyQuery: Send + Sync {
    async fn list_all_headers(&self) -> Result<Vec<VacancyHeader>, VacancyQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<VacancyRecord, VacancyQueryError>;
}
