//! Wire types exchanged with the student-records backend.
//!
//! Field names follow the backend's camelCase JSON, identities included
//! (`idStudent`, `idDepartment`, ...). String fields tolerate `null` and fall
//! back to empty strings so that partially filled rows still render.

pub mod course;
pub mod department;
pub mod enrollment;
pub mod student;

pub use course::Course;
pub use department::Department;
pub use enrollment::{Enrollment, Status};
pub use student::Student;

/// Backend-assigned identity of any entity.
pub type RecordId = i64;
