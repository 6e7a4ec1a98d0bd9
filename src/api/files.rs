//! File operations.

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{FileQuery, ListBody, resolve_fields, truncate};
use super::validate::{parse_entity, parse_list};
use crate::models::{FILE_DEFAULT_FIELDS, FileResponse};

impl PlanfixClient {
    pub async fn get_file(&self, file_id: i64, fields: Option<&str>) -> ApiResult<FileResponse> {
        let fields = resolve_fields(fields, FILE_DEFAULT_FIELDS);
        let payload = self
            .get(&format!("file/{file_id}"), &[("fields", fields)])
            .await?;
        parse_entity(&payload, "file")
    }

    pub async fn list_files(&self, query: &FileQuery) -> ApiResult<Vec<FileResponse>> {
        let mut body = ListBody::new(query.page);
        body.task_id = query.task_id;
        body.project_id = query.project_id;
        let payload = self.post("file/list", &body).await?;
        Ok(truncate(parse_list(&payload, "files")?, query.page))
    }
}

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;
