use super::{RecordId, Student};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Department {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_department: Option<RecordId>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub location: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub phone: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub head: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<Student>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_strings_deserialize_as_empty() {
        let department: Department = serde_json::from_value(json!({
            "idDepartment": 3,
            "name": "Mathematics",
            "location": null,
            "phone": "555-0199",
            "head": null
        }))
        .unwrap();
        assert_eq!(department.id_department, Some(3));
        assert_eq!(department.location, "");
        assert_eq!(department.head, "");
        assert_eq!(department.students, None);
    }
}
