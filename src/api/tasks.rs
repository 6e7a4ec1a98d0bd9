//! Task operations.

use tracing::info;

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{ListBody, TaskQuery, resolve_fields, truncate};
use super::validate::{parse_entity, parse_list, parse_root};
use crate::models::{
    CommentCreateRequest, CreatedId, Filter, TASK_DEFAULT_FIELDS, TaskCreateRequest, TaskFilter,
    TaskResponse, TaskUpdateRequest,
};

impl PlanfixClient {
    pub async fn get_task(&self, task_id: i64, fields: Option<&str>) -> ApiResult<TaskResponse> {
        let fields = resolve_fields(fields, TASK_DEFAULT_FIELDS);
        let payload = self
            .get(&format!("task/{task_id}"), &[("fields", fields)])
            .await?;
        parse_entity(&payload, "task")
    }

    pub async fn list_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<TaskResponse>> {
        let fields = resolve_fields(query.fields.as_deref(), TASK_DEFAULT_FIELDS);
        let body = ListBody::new(query.page)
            .fields(fields)
            .filters(task_filters(query));
        let payload = self.post("task/list", &body).await?;
        let tasks = truncate(parse_list(&payload, "tasks")?, query.page);
        info!(count = tasks.len(), status = %query.status, "Listed tasks");
        Ok(tasks)
    }

    /// Same endpoint as [`list_tasks`](Self::list_tasks) with a name filter.
    pub async fn search_tasks(&self, query: &str, filter: &TaskQuery) -> ApiResult<Vec<TaskResponse>> {
        let query = TaskQuery {
            name: Some(query.to_string()),
            ..filter.clone()
        };
        self.list_tasks(&query).await
    }

    pub async fn create_task(&self, request: &TaskCreateRequest) -> ApiResult<CreatedId> {
        let payload = self.post("task/", request).await?;
        parse_root(&payload)
    }

    pub async fn update_task(&self, task_id: i64, request: &TaskUpdateRequest) -> ApiResult<()> {
        self.post(&format!("task/{task_id}"), request).await?;
        Ok(())
    }

    pub async fn add_task_comment(
        &self,
        task_id: i64,
        request: &CommentCreateRequest,
    ) -> ApiResult<CreatedId> {
        let payload = self
            .post(&format!("task/{task_id}/comments/"), request)
            .await?;
        parse_root(&payload)
    }
}

/// Filters for a task query, in a stable order: project, assignee, name, status.
pub(crate) fn task_filters(query: &TaskQuery) -> Vec<Filter> {
    let mut filters = Vec::new();
    if let Some(project_id) = query.project_id {
        filters.push(TaskFilter::project(project_id));
    }
    if let Some(assignee_id) = query.assignee_id {
        filters.push(TaskFilter::assignee(assignee_id));
    }
    if let Some(name) = query.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        filters.push(TaskFilter::name_contains(name));
    }
    filters.extend(TaskFilter::status(query.status));
    filters
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;
