use serde::{Deserialize, Serialize};

use super::common::{
    DataTagEntryResponse, DateValue, FileRequest, NotifiedRequest, PeopleResponse, PersonRequest,
    PersonResponse, Reminder, ShortEntity, TimePoint,
};
use super::file::FileResponse;

pub const COMMENT_DEFAULT_FIELDS: &str = "id,sourceObjectId,sourceDataVersion,dateTime,type,\
fromType,description,contact,project,owner,isDeleted,isPinned,isHidden,isNotRead,recipients,\
reminders,dataTags,files";

pub const COMMENT_LIST_FIELDS: &str = "id,description,dateTime,owner,type";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PersonRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<NotifiedRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRequest>>,
}

impl CommentCreateRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<NotifiedRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRequest>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<TimePoint>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PersonResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<PeopleResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<Reminder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_tags: Option<Vec<DataTagEntryResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileResponse>>,
}
