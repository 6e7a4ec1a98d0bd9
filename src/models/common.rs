//! Building blocks shared by every Planfix entity.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier assigned by Planfix.
///
/// Most entities use integers, but users and a few directory entries are
/// addressed by strings such as `"user:5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{id}"),
            EntityId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Int(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Str(id.to_string())
    }
}

/// Reference to another entity by numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseEntity {
    pub id: i64,
}

impl BaseEntity {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Reference that may carry a display name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShortEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ShortEntity {
    /// `"Name (#id)"`, degrading gracefully when either part is missing.
    pub fn label(&self) -> String {
        match (&self.name, &self.id) {
            (Some(name), Some(id)) => format!("{name} (#{id})"),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => format!("#{id}"),
            (None, None) => "unknown".to_string(),
        }
    }
}

/// Date/time value as Planfix returns it.
///
/// `date` uses `dd-MM-yyyy`, `time` uses `HH:mm`, `datetime` is ISO-8601.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_utc_seconds: Option<String>,
}

impl TimePoint {
    /// Builds a point from an ISO-8601 string.
    pub fn from_datetime(value: impl Into<String>) -> Self {
        Self {
            datetime: Some(value.into()),
            ..Default::default()
        }
    }

    /// Best-effort conversion to a naive timestamp.
    ///
    /// Tries the ISO field first, then falls back to `date` (+ `time`).
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        self.datetime
            .as_deref()
            .or(self.date_time_utc_seconds.as_deref())
            .and_then(parse_iso)
            .or_else(|| {
                let date = NaiveDate::parse_from_str(self.date.as_deref()?, "%d-%m-%Y").ok()?;
                let time = self
                    .time
                    .as_deref()
                    .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok())
                    .unwrap_or(NaiveTime::MIN);
                Some(date.and_time(time))
            })
    }

    /// Human-readable rendering: `YYYY-MM-DD HH:MM` when a time is known.
    pub fn display(&self) -> String {
        match self.to_naive() {
            Some(dt) if self.datetime.is_some() || self.time.is_some() => {
                dt.format("%Y-%m-%d %H:%M").to_string()
            }
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => self
                .datetime
                .clone()
                .or_else(|| self.date.clone())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    let trimmed = value.trim_end_matches('Z');
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// A request-side date field: either a structured point or a raw string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Point(TimePoint),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    NotDefined,
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationType {
    WorkDays,
    CalendarDays,
}

// =============================================================================
// People and groups
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRequest {
    pub id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRequest {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeopleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<PersonRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupRequest>>,
}

impl PeopleRequest {
    pub fn users(ids: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            users: Some(ids.into_iter().map(|id| PersonRequest { id }).collect()),
            groups: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeopleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<PersonResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupResponse>>,
}

impl PeopleResponse {
    /// Name of the first user that has one.
    pub fn first_user_name(&self) -> Option<&str> {
        self.users
            .as_ref()?
            .iter()
            .find_map(|user| user.name.as_deref())
    }
}

/// Users and groups to notify about a comment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotifiedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<PersonRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupRequest>>,
}

// =============================================================================
// Contact channels
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneRequest {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_number: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompanyEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Custom fields, tags, files
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValueRequest {
    pub field: CustomField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomFieldValueResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<CustomField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTag {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTagEntryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_tag: Option<DataTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<i64>,
}

/// Attachment reference on the request side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRequest {
    pub id: i64,
}

// =============================================================================
// Scheduling
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recurrence {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<TimePoint>,
}

/// Id returned by creation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}
