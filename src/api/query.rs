//! Inputs for the list and search operations.

use serde::Serialize;

use crate::models::{Filter, StatusFilter};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Offset-based window into a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub page: PageRequest,
    pub project_id: Option<i64>,
    pub assignee_id: Option<i64>,
    pub status: StatusFilter,
    /// Name substring; set by `search_tasks`.
    pub name: Option<String>,
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    pub page: PageRequest,
    /// Companies only when true, people only when false.
    pub is_company: bool,
    pub name: Option<String>,
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommentQuery {
    pub page: PageRequest,
    pub task_id: Option<i64>,
    pub project_id: Option<i64>,
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FileQuery {
    pub page: PageRequest,
    pub task_id: Option<i64>,
    pub project_id: Option<i64>,
}

/// Body shared by every `*/list` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListBody<'a> {
    pub offset: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_company: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

impl<'a> ListBody<'a> {
    pub fn new(page: PageRequest) -> Self {
        Self {
            offset: page.offset,
            page_size: page.limit,
            fields: None,
            filters: Vec::new(),
            is_company: None,
            task_id: None,
            project_id: None,
        }
    }

    pub fn fields(mut self, fields: &'a str) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }
}

/// Caller-supplied field list, or `default` when absent or blank.
pub(crate) fn resolve_fields<'a>(fields: Option<&'a str>, default: &'a str) -> &'a str {
    match fields.map(str::trim) {
        Some(f) if !f.is_empty() => f,
        _ => default,
    }
}

/// Planfix sometimes returns more rows than asked for.
pub(crate) fn truncate<T>(mut items: Vec<T>, page: PageRequest) -> Vec<T> {
    items.truncate(page.limit as usize);
    items
}
