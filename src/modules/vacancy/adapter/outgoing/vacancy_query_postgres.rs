use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::vacancy::application::ports::outgoing::{
    VacancyHeader, VacancyQuery, VacancyQueryError, VacancyRecord,
};

// SeaORM entity
use super::sea_orm_entity::vacancies::{Entity as VacancyEntity, Model as VacancyModel};

#[derive(Debug, Clone)]
pub struct VacancyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VacancyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VacancyQuery for VacancyQueryPostgres {
    async fn list_all_headers(&self) -> Result<Vec<VacancyHeader>, VacancyQueryError> {
        let models: Vec<VacancyModel> = VacancyEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| VacancyQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_header()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<VacancyRecord, VacancyQueryError> {
        let model: Option<VacancyModel> = VacancyEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| VacancyQueryError::DatabaseError(e.to_string()))?;

        match model {
            Some(m) => Ok(m.to_record()),
            None => Err(VacancyQueryError::VacancyNotFound),
        }
    }
}
