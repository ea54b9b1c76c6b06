use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::vacancy::application::domain::entities::{OwnerId, Vacancy};
use crate::modules::vacancy::application::ports::outgoing::{
    VacancyRepository, VacancyRepositoryError,
};

// SeaORM entity imports
use super::sea_orm_entity::vacancies::{
    ActiveModel as VacancyActiveModel, Entity as VacancyEntity, Model as VacancyModel,
};

#[derive(Debug, Clone)]
pub struct VacancyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VacancyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VacancyRepository for VacancyRepositoryPostgres {
    async fn add_vacancy(&self, vacancy: &Vacancy) -> Result<(), VacancyRepositoryError> {
        let active = VacancyActiveModel {
            id: Set(vacancy.id()),
            owner_user_id: Set(vacancy.owner().value() as i64),
            title: Set(vacancy.title().to_string()),
            description: Set(vacancy.description().to_string()),
            created: Set(vacancy.created().fixed_offset()),
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| VacancyRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_id(
        &self,
        vacancy_id: Uuid,
        owner: OwnerId,
    ) -> Result<(), VacancyRepositoryError> {
        let model: Option<VacancyModel> = VacancyEntity::find_by_id(vacancy_id)
            .one(&*self.db)
            .await
            .map_err(|e| VacancyRepositoryError::DatabaseError(e.to_string()))?;

        let model = model.ok_or(VacancyRepositoryError::VacancyNotFound)?;

        if model.owner_user_id != owner.value() as i64 {
            return Err(VacancyRepositoryError::NotOwned);
        }

        let result = VacancyEntity::delete_by_id(vacancy_id)
            .exec(&*self.db)
            .await
            .map_err(|e| VacancyRepositoryError::DatabaseError(e.to_string()))?;

        // Row vanished between the lookup and the delete
        if result.rows_affected == 0 {
            return Err(VacancyRepositoryError::VacancyNotFound);
        }

        Ok(())
    }
}
