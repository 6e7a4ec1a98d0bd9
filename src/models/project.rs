//! Project schemas.

use serde::{Deserialize, Serialize};

use super::common::{
    BaseEntity, CustomFieldValueRequest, CustomFieldValueResponse, DataTagEntryResponse,
    DateValue, FileRequest, PersonRequest, PersonResponse, ShortEntity, TimePoint,
};
use super::file::FileResponse;

pub const PROJECT_DEFAULT_FIELDS: &str = "id,template,name,description,owner,client,isDeleted,\
startDate,endDate,createdDate,dateOfLastUpdate,sourceObjectId,sourceDataVersion";

/// Lighter field set for list calls.
pub const PROJECT_LIST_FIELDS: &str =
    "id,name,description,owner,client,startDate,endDate,isDeleted";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PersonRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueRequest>>,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PersonRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueRequest>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PersonResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_last_update: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_tags: Option<Vec<DataTagEntryResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueResponse>>,
}

impl ProjectResponse {
    pub fn is_active(&self) -> bool {
        !self.is_deleted.unwrap_or(false)
    }
}
