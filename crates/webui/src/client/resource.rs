//! Endpoint tables of the managed collections.

use crate::model::{Department, Enrollment, RecordId, Student};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// A backend collection: its path segment, endpoint names and entity type.
pub trait Resource: 'static {
    type Entity: Clone + Debug + PartialEq + Serialize + DeserializeOwned + 'static;

    const COLLECTION: &'static str;
    const LIST: &'static str;
    const GET: &'static str;
    const CREATE: &'static str;
    const UPDATE: &'static str;
    const DELETE: &'static str;

    /// Lower-case name used in user-facing messages.
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn id(entity: &Self::Entity) -> Option<RecordId>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentResource;

impl Resource for StudentResource {
    type Entity = Student;

    const COLLECTION: &'static str = "students";
    const LIST: &'static str = "getAllStudents";
    const GET: &'static str = "getStudent";
    const CREATE: &'static str = "createStudent";
    const UPDATE: &'static str = "updateStudent";
    const DELETE: &'static str = "deleteStudent";

    const SINGULAR: &'static str = "student";
    const PLURAL: &'static str = "students";

    fn id(entity: &Student) -> Option<RecordId> {
        entity.id_student
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepartmentResource;

impl Resource for DepartmentResource {
    type Entity = Department;

    // The backend spells it this way.
    const COLLECTION: &'static str = "Depatment";
    const LIST: &'static str = "getAllDepartment";
    const GET: &'static str = "getDepartment";
    const CREATE: &'static str = "createDepartment";
    const UPDATE: &'static str = "updateDepartment";
    const DELETE: &'static str = "deleteDepartment";

    const SINGULAR: &'static str = "department";
    const PLURAL: &'static str = "departments";

    fn id(entity: &Department) -> Option<RecordId> {
        entity.id_department
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnrollmentResource;

impl Resource for EnrollmentResource {
    type Entity = Enrollment;

    const COLLECTION: &'static str = "Enrollment";
    const LIST: &'static str = "getAllEnrollment";
    const GET: &'static str = "getEnrollment";
    const CREATE: &'static str = "createEnrollment";
    const UPDATE: &'static str = "updateEnrollment";
    const DELETE: &'static str = "deleteEnrollment";

    const SINGULAR: &'static str = "enrollment";
    const PLURAL: &'static str = "enrollments";

    fn id(entity: &Enrollment) -> Option<RecordId> {
        entity.id_enrollment
    }
}
