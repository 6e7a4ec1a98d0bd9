//! Typed list filters.
//!
//! Planfix list endpoints accept a `filters` array where each entry is a
//! `(type, operator, value)` triple. The numeric `type` codes live here and
//! nowhere else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Task filter: assignee (`"user:<id>"`).
pub const TASK_FILTER_ASSIGNEE: i64 = 2;
/// Task filter: project id.
pub const TASK_FILTER_PROJECT: i64 = 5;
/// Task filter: task name substring.
pub const TASK_FILTER_NAME: i64 = 8;
/// Task filter: status id set.
pub const TASK_FILTER_STATUS: i64 = 10;
/// Contact filter: contact name substring.
pub const CONTACT_FILTER_NAME: i64 = 4001;

/// Built-in "Completed" status id.
pub const STATUS_COMPLETED: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Equal,
    NotEqual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "type")]
    pub kind: i64,
    pub operator: FilterOperator,
    pub value: Value,
}

impl Filter {
    pub fn new(kind: i64, operator: FilterOperator, value: Value) -> Self {
        Self {
            kind,
            operator,
            value,
        }
    }
}

/// Constructors for task-list filters.
pub struct TaskFilter;

impl TaskFilter {
    pub fn project(project_id: i64) -> Filter {
        Filter::new(TASK_FILTER_PROJECT, FilterOperator::Equal, json!(project_id))
    }

    pub fn assignee(user_id: i64) -> Filter {
        Filter::new(
            TASK_FILTER_ASSIGNEE,
            FilterOperator::Equal,
            json!(format!("user:{user_id}")),
        )
    }

    pub fn name_contains(query: &str) -> Filter {
        Filter::new(TASK_FILTER_NAME, FilterOperator::Equal, json!(query))
    }

    /// `None` for [`StatusFilter::All`], which needs no filter at all.
    pub fn status(status: StatusFilter) -> Option<Filter> {
        match status {
            StatusFilter::Active => Some(Filter::new(
                TASK_FILTER_STATUS,
                FilterOperator::NotEqual,
                json!([STATUS_COMPLETED]),
            )),
            StatusFilter::Completed => Some(Filter::new(
                TASK_FILTER_STATUS,
                FilterOperator::Equal,
                json!([STATUS_COMPLETED]),
            )),
            StatusFilter::All => None,
        }
    }
}

/// Constructors for contact-list filters.
pub struct ContactFilter;

impl ContactFilter {
    pub fn name_contains(query: &str) -> Filter {
        Filter::new(CONTACT_FILTER_NAME, FilterOperator::Equal, json!(query))
    }
}

/// Task status selector accepted by the task tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Active,
    Completed,
    All,
}

impl StatusFilter {
    pub const ALLOWED: [&'static str; 3] = ["active", "completed", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
            StatusFilter::All => "all",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            "all" => Ok(StatusFilter::All),
            other => Err(format!(
                "status must be one of: {} (got '{other}')",
                Self::ALLOWED.join(", ")
            )),
        }
    }
}
