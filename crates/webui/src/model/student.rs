use super::{Department, Enrollment, RecordId};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Student {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_student: Option<RecordId>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub first_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub phone: String,
    /// `YYYY-MM-DD`
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub date_of_birth: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollments: Option<Vec<Enrollment>>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_student_is_sent_without_identity() {
        let student = Student {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.io".to_string(),
            phone: "555-0100".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            address: "1 Analytical Engine Way".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&student).unwrap(),
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@x.io",
                "phone": "555-0100",
                "dateOfBirth": "1990-01-01",
                "address": "1 Analytical Engine Way"
            })
        );
    }

    #[test]
    fn nested_department_is_read() {
        let student: Student = serde_json::from_value(json!({
            "idStudent": 7,
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@navy.mil",
            "phone": "555-0111",
            "dateOfBirth": "1906-12-09",
            "address": null,
            "department": { "idDepartment": 2, "name": "Computing" }
        }))
        .unwrap();
        assert_eq!(student.id_student, Some(7));
        assert_eq!(student.address, "");
        assert_eq!(
            student.department.and_then(|d| d.id_department),
            Some(2)
        );
        assert_eq!(student.enrollments, None);
    }

    #[test]
    fn full_name_skips_missing_parts() {
        let student = Student {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(student.full_name(), "Ada");
    }
}
