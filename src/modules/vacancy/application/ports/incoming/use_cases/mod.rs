mod close_vacancy_use_case;
mod get_vacancy_use_case;
mod list_vacancies_use_case;
mod open_vacancy_use_case;

pub use close_vacancy_use_case::{CloseVacancyError, CloseVacancyUseCase};
pub use get_vacancy_use_case::{GetVacancyError, GetVacancyUseCase};
pub use list_vacancies_use_case::{ListVacanciesError, ListVacanciesUseCase};
pub use open_vacancy_use_case::{OpenVacancyCommand, OpenVacancyError, OpenVacancyUseCase};
