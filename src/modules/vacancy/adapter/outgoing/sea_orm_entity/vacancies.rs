use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::vacancy::application::domain::entities::OwnerId;
use crate::vacancy::application::ports::outgoing::{VacancyHeader, VacancyRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vacancies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    // u64 owner id bit-cast into a signed column; Postgres has no unsigned
    pub owner_user_id: i64,

    pub title: String,

    pub description: String,

    pub created: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_header(&self) -> VacancyHeader {
        VacancyHeader {
            id: self.id,
            title: self.title.clone(),
        }
    }

    pub fn to_record(&self) -> VacancyRecord {
        VacancyRecord {
            id: self.id,
            owner: OwnerId::from(self.owner_user_id as u64),
            title: self.title.clone(),
            description: self.description.clone(),
            created: self.created.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
