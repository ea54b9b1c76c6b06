use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::modules::vacancy::application::domain::entities::OwnerId;
use crate::modules::vacancy::application::ports::outgoing::{
    PermissionQuery, PermissionQueryError,
};

// SeaORM entity
use super::sea_orm_entity::vacancy_managers::{
    Entity as VacancyManagerEntity, Model as VacancyManagerModel,
};

/// Looks up the management capability in the `vacancy_managers` table.
/// A missing row means the user was never granted anything.
#[derive(Debug, Clone)]
pub struct PermissionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PermissionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PermissionQuery for PermissionQueryPostgres {
    async fn can_manage_vacancies(&self, user: OwnerId) -> Result<bool, PermissionQueryError> {
        let model: Option<VacancyManagerModel> =
            VacancyManagerEntity::find_by_id(user.value() as i64)
                .one(&*self.db)
                .await
                .map_err(|e| PermissionQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.can_manage_vacancies).unwrap_or(false))
    }
}
