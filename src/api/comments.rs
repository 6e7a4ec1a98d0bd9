//! Comment operations.

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{CommentQuery, ListBody, resolve_fields, truncate};
use super::validate::{parse_entity, parse_list};
use crate::models::{
    COMMENT_DEFAULT_FIELDS, COMMENT_LIST_FIELDS, CommentResponse, CommentUpdateRequest,
};

impl PlanfixClient {
    pub async fn get_comment(&self, comment_id: i64, fields: Option<&str>) -> ApiResult<CommentResponse> {
        let fields = resolve_fields(fields, COMMENT_DEFAULT_FIELDS);
        let payload = self
            .get(&format!("comment/{comment_id}"), &[("fields", fields)])
            .await?;
        parse_entity(&payload, "comment")
    }

    /// Comments of a task, else of a project, else account-wide.
    pub async fn list_comments(&self, query: &CommentQuery) -> ApiResult<Vec<CommentResponse>> {
        let fields = resolve_fields(query.fields.as_deref(), COMMENT_LIST_FIELDS);
        let body = ListBody::new(query.page).fields(fields);
        let path = comment_list_path(query);
        let payload = self.post(&path, &body).await?;
        Ok(truncate(parse_list(&payload, "comments")?, query.page))
    }

    pub async fn update_comment(
        &self,
        comment_id: i64,
        request: &CommentUpdateRequest,
    ) -> ApiResult<()> {
        self.post(&format!("comment/{comment_id}"), request).await?;
        Ok(())
    }
}

fn comment_list_path(query: &CommentQuery) -> String {
    match (query.task_id, query.project_id) {
        (Some(task_id), _) => format!("task/{task_id}/comments/list"),
        (None, Some(project_id)) => format!("project/{project_id}/comments/list"),
        (None, None) => "comment/list".to_string(),
    }
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;
