//! Editable copies of entities, validated only when submitted.

use crate::{
    model::{Department, Enrollment, RecordId, Status, Student},
    util::date::DATE_FORMAT,
};
use chrono::{NaiveDate, Utc};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be a date (YYYY-MM-DD), got {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("{0:?} is not a valid status")]
    UnknownStatus(String),
    #[error("there is no {kind} with id {id}")]
    UnknownReference { kind: &'static str, id: RecordId },
}

/// Form state for one entity kind.
pub trait Draft: Clone + Debug + PartialEq + 'static {
    type Entity;
    type Field: Copy + Debug + PartialEq + 'static;
    /// Reference data needed to resolve relations at submit time.
    type Lookup: Clone + Debug + Default + PartialEq + 'static;

    fn blank() -> Self;
    fn from_entity(entity: &Self::Entity) -> Self;
    fn set(&mut self, field: Self::Field, value: String);
    fn submit(&self, lookup: &Self::Lookup) -> Result<Self::Entity, DraftError>;
}

fn required(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::Required(field))
    } else {
        Ok(())
    }
}

fn date(field: &'static str, value: &str) -> Result<(), DraftError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(drop)
        .map_err(|_| DraftError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn email(value: &str) -> Result<(), DraftError> {
    match value.trim().split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(DraftError::InvalidEmail(value.to_string())),
    }
}

fn optional_id(field: &'static str, value: &str) -> Result<Option<RecordId>, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| DraftError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn optional_number(field: &'static str, value: &str) -> Result<Option<f64>, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(DraftError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

fn id_to_input(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Student

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Address,
    /// Department id, empty for none.
    Department,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentDraft {
    pub student: Student,
    pub department_id: String,
}

impl StudentDraft {
    fn resolve_department(
        &self,
        departments: &[Department],
    ) -> Result<Option<Department>, DraftError> {
        let Some(id) = optional_id("Department", &self.department_id)? else {
            return Ok(None);
        };
        if let Some(department) = departments.iter().find(|d| d.id_department == Some(id)) {
            return Ok(Some(department.clone()));
        }
        match &self.student.department {
            Some(current) if current.id_department == Some(id) => Ok(Some(current.clone())),
            _ => Err(DraftError::UnknownReference {
                kind: "department",
                id,
            }),
        }
    }
}

impl Draft for StudentDraft {
    type Entity = Student;
    type Field = StudentField;
    type Lookup = Vec<Department>;

    fn blank() -> Self {
        Self {
            student: Student::default(),
            department_id: String::new(),
        }
    }

    fn from_entity(student: &Student) -> Self {
        Self {
            student: student.clone(),
            department_id: id_to_input(
                student.department.as_ref().and_then(|d| d.id_department),
            ),
        }
    }

    fn set(&mut self, field: StudentField, value: String) {
        let student = &mut self.student;
        match field {
            StudentField::FirstName => student.first_name = value,
            StudentField::LastName => student.last_name = value,
            StudentField::Email => student.email = value,
            StudentField::Phone => student.phone = value,
            StudentField::DateOfBirth => student.date_of_birth = value,
            StudentField::Address => student.address = value,
            StudentField::Department => self.department_id = value,
        }
    }

    fn submit(&self, departments: &Vec<Department>) -> Result<Student, DraftError> {
        let draft = &self.student;
        required("First name", &draft.first_name)?;
        required("Last name", &draft.last_name)?;
        required("Email", &draft.email)?;
        email(&draft.email)?;
        required("Phone", &draft.phone)?;
        required("Date of birth", &draft.date_of_birth)?;
        date("Date of birth", &draft.date_of_birth)?;

        let mut student = draft.clone();
        student.department = self.resolve_department(departments)?;
        Ok(student)
    }
}

// ---------------------------------------------------------------------------
// Department

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepartmentField {
    Name,
    Location,
    Phone,
    Head,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DepartmentDraft {
    pub department: Department,
}

impl Draft for DepartmentDraft {
    type Entity = Department;
    type Field = DepartmentField;
    type Lookup = ();

    fn blank() -> Self {
        Self {
            department: Department::default(),
        }
    }

    fn from_entity(department: &Department) -> Self {
        Self {
            department: department.clone(),
        }
    }

    fn set(&mut self, field: DepartmentField, value: String) {
        let department = &mut self.department;
        match field {
            DepartmentField::Name => department.name = value,
            DepartmentField::Location => department.location = value,
            DepartmentField::Phone => department.phone = value,
            DepartmentField::Head => department.head = value,
        }
    }

    fn submit(&self, _: &()) -> Result<Department, DraftError> {
        let department = &self.department;
        required("Name", &department.name)?;
        required("Location", &department.location)?;
        required("Phone", &department.phone)?;
        required("Head", &department.head)?;
        Ok(department.clone())
    }
}

// ---------------------------------------------------------------------------
// Enrollment

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentField {
    EnrollmentDate,
    Grade,
    Status,
    StudentId,
    CourseId,
}

/// Grade, status and the two ids are kept as typed until submit.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentDraft {
    pub enrollment: Enrollment,
    pub grade: String,
    pub status: String,
    pub student_id: String,
    pub course_id: String,
}

impl EnrollmentDraft {
    /// A new enrollment dated `today`, in the ACTIVE state.
    pub fn blank_on(today: NaiveDate) -> Self {
        Self {
            enrollment: Enrollment {
                enrollment_date: today.format(DATE_FORMAT).to_string(),
                status: Some(Status::Active),
                ..Default::default()
            },
            grade: String::new(),
            status: Status::Active.to_string(),
            student_id: String::new(),
            course_id: String::new(),
        }
    }
}

impl Draft for EnrollmentDraft {
    type Entity = Enrollment;
    type Field = EnrollmentField;
    type Lookup = Vec<Student>;

    fn blank() -> Self {
        Self::blank_on(Utc::now().date_naive())
    }

    fn from_entity(enrollment: &Enrollment) -> Self {
        Self {
            enrollment: enrollment.clone(),
            grade: enrollment
                .grade
                .map(|grade| grade.to_string())
                .unwrap_or_default(),
            status: enrollment
                .status
                .map(|status| status.to_string())
                .unwrap_or_default(),
            student_id: id_to_input(enrollment.student.as_ref().and_then(|s| s.id_student)),
            course_id: id_to_input(enrollment.course.as_ref().and_then(|c| c.id_course)),
        }
    }

    fn set(&mut self, field: EnrollmentField, value: String) {
        match field {
            EnrollmentField::EnrollmentDate => self.enrollment.enrollment_date = value,
            EnrollmentField::Grade => self.grade = value,
            EnrollmentField::Status => self.status = value,
            EnrollmentField::StudentId => self.student_id = value,
            EnrollmentField::CourseId => self.course_id = value,
        }
    }

    fn submit(&self, students: &Vec<Student>) -> Result<Enrollment, DraftError> {
        required("Enrollment date", &self.enrollment.enrollment_date)?;
        date("Enrollment date", &self.enrollment.enrollment_date)?;
        required("Status", &self.status)?;
        let status: Status = self
            .status
            .trim()
            .parse()
            .map_err(|_| DraftError::UnknownStatus(self.status.clone()))?;
        let grade = optional_number("Grade", &self.grade)?;

        let mut enrollment = self.enrollment.clone();
        enrollment.status = Some(status);
        enrollment.grade = grade;
        // An id that matches no loaded student leaves the current reference in place.
        if let Some(student_id) = optional_id("Student ID", &self.student_id)?
            && let Some(student) = students.iter().find(|s| s.id_student == Some(student_id))
        {
            enrollment.student = Some(student.clone());
        }
        // Course ids are checked but not resolved; the enrollment keeps the course it had.
        optional_id("Course ID", &self.course_id)?;
        Ok(enrollment)
    }
}
