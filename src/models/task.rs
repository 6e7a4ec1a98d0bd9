//! Task schemas.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{
    BaseEntity, CustomFieldValueRequest, CustomFieldValueResponse, DataTagEntryResponse,
    DateValue, DurationType, DurationUnit, FileRequest, PeopleRequest, PeopleResponse,
    PersonRequest, PersonResponse, Priority, Recurrence, ShortEntity, TaskStatus, TimePoint,
};
use super::file::FileResponse;

/// Fields requested when the caller does not pick any.
pub const TASK_DEFAULT_FIELDS: &str =
    "id,name,description,priority,status,assigner,assignees,project,startDateTime,endDateTime";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_checking: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<PersonRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_start_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_start_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<DurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_favorites: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<PeopleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<PeopleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditors: Option<PeopleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueRequest>>,
}

impl TaskCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial update: every field is optional and only set fields are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_checking: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<PersonRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_start_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_start_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delayed_till_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<DurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_favorites: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<PeopleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<PeopleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditors: Option<PeopleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueRequest>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_checking: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<PersonResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_start_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_start_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delayed_till_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_completion_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_last_update: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_to_dead_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_accepted_in_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_favorites: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_summary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sequential: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<PeopleResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<PeopleResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditors: Option<PeopleResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_tags: Option<Vec<DataTagEntryResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueResponse>>,
}

impl TaskResponse {
    /// True when Planfix flagged the task overdue or its deadline is before `now`.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        if let Some(flag) = self.overdue {
            return flag;
        }
        self.end_date_time
            .as_ref()
            .and_then(TimePoint::to_naive)
            .is_some_and(|deadline| deadline < now)
    }

    /// Whom to show as responsible: the assigner, else the first assignee.
    pub fn responsible_name(&self) -> Option<&str> {
        self.assigner
            .as_ref()
            .and_then(|person| person.name.as_deref())
            .or_else(|| self.assignees.as_ref()?.first_user_name())
    }
}
