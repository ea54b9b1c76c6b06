use async_trait::async_trait;
use uuid::Uuid;

use crate::vacancy::application::domain::entities::OwnerId;
use crate::vacancy::application::ports::incoming::use_cases::{
    CloseVacancyError, CloseVacancyUseCase, GetVacancyError, GetVacancyUseCase,
    ListVacanciesError, ListVacanciesUseCase, OpenVacancyCommand, OpenVacancyError,
    OpenVacancyUseCase,
};
use crate::vacancy::application::ports::outgoing::{VacancyHeader, VacancyRecord};

// ============================================================
// List Vacancies
// ============================================================

#[derive(Clone)]
pub struct StubListVacanciesUseCase {
    result: Result<Vec<VacancyHeader>, ListVacanciesError>,
}

impl StubListVacanciesUseCase {
    pub fn success(headers: Vec<VacancyHeader>) -> Self {
        Self {
            result: Ok(headers),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListVacanciesError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListVacanciesUseCase for StubListVacanciesUseCase {
    async fn execute(&self) -> Result<Vec<VacancyHeader>, ListVacanciesError> {
        self.result.clone()
    }
}

// ============================================================
// Get Vacancy
// ============================================================

#[derive(Clone)]
pub struct StubGetVacancyUseCase {
    result: Result<VacancyRecord, GetVacancyError>,
}

impl StubGetVacancyUseCase {
    pub fn found(record: VacancyRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetVacancyError::VacancyNotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetVacancyError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetVacancyUseCase for StubGetVacancyUseCase {
    async fn execute(&self, _id: Uuid) -> Result<VacancyRecord, GetVacancyError> {
        self.result.clone()
    }
}

// ============================================================
// Open Vacancy
// ============================================================

#[derive(Clone)]
pub struct StubOpenVacancyUseCase {
    result: Result<Uuid, OpenVacancyError>,
}

impl StubOpenVacancyUseCase {
    pub fn success(id: Uuid) -> Self {
        Self { result: Ok(id) }
    }

    pub fn forbidden() -> Self {
        Self {
            result: Err(OpenVacancyError::ManagementNotPermitted),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(OpenVacancyError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl OpenVacancyUseCase for StubOpenVacancyUseCase {
    async fn execute(&self, _command: OpenVacancyCommand) -> Result<Uuid, OpenVacancyError> {
        self.result.clone()
    }
}

// ============================================================
// Close Vacancy
// ============================================================

#[derive(Clone)]
pub struct StubCloseVacancyUseCase {
    result: Result<(), CloseVacancyError>,
}

impl StubCloseVacancyUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(CloseVacancyError::VacancyNotFound),
        }
    }

    pub fn not_owned() -> Self {
        Self {
            result: Err(CloseVacancyError::NotOwned),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CloseVacancyError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CloseVacancyUseCase for StubCloseVacancyUseCase {
    async fn execute(&self, _vacancy_id: Uuid, _owner: OwnerId) -> Result<(), CloseVacancyError> {
        self.result.clone()
    }
}
