//! Project operations.

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{ListBody, PageRequest, resolve_fields, truncate};
use super::validate::{parse_entity, parse_list, parse_root};
use crate::models::{
    CreatedId, PROJECT_DEFAULT_FIELDS, PROJECT_LIST_FIELDS, ProjectRequest, ProjectResponse,
    ProjectUpdateRequest,
};

impl PlanfixClient {
    pub async fn get_project(&self, project_id: i64, fields: Option<&str>) -> ApiResult<ProjectResponse> {
        let fields = resolve_fields(fields, PROJECT_DEFAULT_FIELDS);
        let payload = self
            .get(&format!("project/{project_id}"), &[("fields", fields)])
            .await?;
        parse_entity(&payload, "project")
    }

    pub async fn list_projects(&self, page: PageRequest) -> ApiResult<Vec<ProjectResponse>> {
        let body = ListBody::new(page).fields(PROJECT_LIST_FIELDS);
        let payload = self.post("project/list", &body).await?;
        Ok(truncate(parse_list(&payload, "projects")?, page))
    }

    pub async fn create_project(&self, request: &ProjectRequest) -> ApiResult<CreatedId> {
        let payload = self.post("project/", request).await?;
        parse_root(&payload)
    }

    pub async fn update_project(
        &self,
        project_id: i64,
        request: &ProjectUpdateRequest,
    ) -> ApiResult<()> {
        self.post(&format!("project/{project_id}"), request).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;
