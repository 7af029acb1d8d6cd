use super::{Enrollment, RecordId};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Only ever seen nested inside an [`Enrollment`].
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_course: Option<RecordId>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub code: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub credit: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollments: Option<Vec<Enrollment>>,
}
