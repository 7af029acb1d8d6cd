pub mod department_list_page;
pub mod enrollment_list_page;
pub mod list_page;
pub mod modal;
pub mod not_found;
pub mod student_list_page;
