use super::{Course, RecordId, Student};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde_with::SerializeDisplay,
    serde_with::DeserializeFromStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Active,
    Completed,
    Dropped,
    Failed,
    Withdrawn,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_enrollment: Option<RecordId>,
    /// `YYYY-MM-DD`
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub enrollment_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    /// `None` when the backend sent no status or one outside [`Status`].
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}
