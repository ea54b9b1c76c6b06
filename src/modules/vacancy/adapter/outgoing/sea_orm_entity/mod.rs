pub mod vacancies;
pub mod vacancy_managers;
