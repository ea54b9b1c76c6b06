mod close_vacancy_service;
mod get_vacancy_service;
mod list_vacancies_service;
mod open_vacancy_service;

pub use close_vacancy_service::CloseVacancyService;
pub use get_vacancy_service::GetVacancyService;
pub use list_vacancies_service::ListVacanciesService;
pub use open_vacancy_service::OpenVacancyService;
