use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::vacancy::application::domain::entities::{OwnerId, Vacancy};
use crate::vacancy::application::ports::outgoing::{
    PermissionQuery, PermissionQueryError, VacancyHeader, VacancyQuery, VacancyQueryError,
    VacancyRecord, VacancyRepository, VacancyRepositoryError,
};

#[derive(Debug, Clone)]
pub struct StoredVacancy {
    pub id: Uuid,
    pub owner: u64,
    pub title: String,
    pub description: String,
    pub created: DateTime<Utc>,
}

/// In-memory stand-in for the three Postgres adapters, used by the
/// end-to-end flow tests. Implements all outgoing ports over a shared map so
/// real services can be wired against it.
#[derive(Clone, Default)]
pub struct InMemoryVacancyStore {
    vacancies: Arc<Mutex<HashMap<Uuid, StoredVacancy>>>,
    managers: Arc<Mutex<HashSet<u64>>>,
}

impl InMemoryVacancyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant_management(&self, user: u64) {
        self.managers.lock().unwrap().insert(user);
    }

    pub fn stored_ids(&self) -> Vec<Uuid> {
        self.vacancies.lock().unwrap().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.vacancies.lock().unwrap().len()
    }
}

#[async_trait]
impl VacancyQuery for InMemoryVacancyStore {
    async fn list_all_headers(&self) -> Result<Vec<VacancyHeader>, VacancyQueryError> {
        let vacancies = self.vacancies.lock().unwrap();

        Ok(vacancies
            .values()
            .map(|v| VacancyHeader {
                id: v.id,
                title: v.title.clone(),
            })
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<VacancyRecord, VacancyQueryError> {
        let vacancies = self.vacancies.lock().unwrap();

        vacancies
            .get(&id)
            .map(|v| VacancyRecord {
                id: v.id,
                owner: OwnerId::from(v.owner),
                title: v.title.clone(),
                description: v.description.clone(),
                created: v.created,
            })
            .ok_or(VacancyQueryError::VacancyNotFound)
    }
}

#[async_trait]
impl VacancyRepository for InMemoryVacancyStore {
    async fn add_vacancy(&self, vacancy: &Vacancy) -> Result<(), VacancyRepositoryError> {
        let mut vacancies = self.vacancies.lock().unwrap();

        vacancies.insert(
            vacancy.id(),
            StoredVacancy {
                id: vacancy.id(),
                owner: vacancy.owner().value(),
                title: vacancy.title().to_string(),
                description: vacancy.description().to_string(),
                created: vacancy.created(),
            },
        );

        Ok(())
    }

    async fn delete_by_id(
        &self,
        vacancy_id: Uuid,
        owner: OwnerId,
    ) -> Result<(), VacancyRepositoryError> {
        let mut vacancies = self.vacancies.lock().unwrap();

        let stored = vacancies
            .get(&vacancy_id)
            .ok_or(VacancyRepositoryError::VacancyNotFound)?;

        if stored.owner != owner.value() {
            return Err(VacancyRepositoryError::NotOwned);
        }

        vacancies.remove(&vacancy_id);
        Ok(())
    }
}

#[async_trait]
impl PermissionQuery for InMemoryVacancyStore {
    async fn can_manage_vacancies(&self, user: OwnerId) -> Result<bool, PermissionQueryError> {
        Ok(self.managers.lock().unwrap().contains(&user.value()))
    }
}
