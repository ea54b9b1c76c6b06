use actix_web::web;
use std::sync::Arc;

use crate::tests::support::stubs::*;
use crate::vacancy::application::ports::incoming::use_cases::{
    CloseVacancyUseCase, GetVacancyUseCase, ListVacanciesUseCase, OpenVacancyUseCase,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    list_vacancies: Option<Arc<dyn ListVacanciesUseCase + Send + Sync>>,
    get_vacancy: Option<Arc<dyn GetVacancyUseCase + Send + Sync>>,
    open_vacancy: Option<Arc<dyn OpenVacancyUseCase + Send + Sync>>,
    close_vacancy: Option<Arc<dyn CloseVacancyUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_vacancies: Some(Arc::new(StubListVacanciesUseCase::success(vec![]))),
            get_vacancy: Some(Arc::new(StubGetVacancyUseCase::not_found())),
            open_vacancy: Some(Arc::new(StubOpenVacancyUseCase::forbidden())),
            close_vacancy: Some(Arc::new(StubCloseVacancyUseCase::not_found())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_vacancies(
        mut self,
        uc: impl ListVacanciesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_vacancies = Some(Arc::new(uc));
        self
    }

    pub fn with_get_vacancy(mut self, uc: impl GetVacancyUseCase + Send + Sync + 'static) -> Self {
        self.get_vacancy = Some(Arc::new(uc));
        self
    }

    pub fn with_open_vacancy(
        mut self,
        uc: impl OpenVacancyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.open_vacancy = Some(Arc::new(uc));
        self
    }

    pub fn with_close_vacancy(
        mut self,
        uc: impl CloseVacancyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.close_vacancy = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            list_vacancies_use_case: self.list_vacancies.unwrap(),
            get_vacancy_use_case: self.get_vacancy.unwrap(),
            open_vacancy_use_case: self.open_vacancy.unwrap(),
            close_vacancy_use_case: self.close_vacancy.unwrap(),
        })
    }
}
