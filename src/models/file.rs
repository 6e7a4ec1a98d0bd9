use serde::{Deserialize, Serialize};

use super::common::{PersonResponse, TimePoint};

pub const FILE_DEFAULT_FIELDS: &str = "id,name,size,downloadUrl";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<PersonResponse>,
}
