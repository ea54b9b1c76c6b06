mod close_vacancy;
mod get_vacancy;
mod list_vacancies;
mod open_vacancy;

pub use close_vacancy::{close_vacancy_handler, CloseVacancyQuery};
pub use get_vacancy::{get_vacancy_handler, VacancyResponse};
pub use list_vacancies::{list_vacancies_handler, VacancyHeaderResponse};
pub use open_vacancy::{open_vacancy_handler, OpenVacancyRequest};

// The OpenApi derive resolves handlers through this module, so the generated
// path items have to travel with them.
pub use close_vacancy::__path_close_vacancy_handler;
pub use get_vacancy::__path_get_vacancy_handler;
pub use list_vacancies::__path_list_vacancies_handler;
pub use open_vacancy::__path_open_vacancy_handler;
