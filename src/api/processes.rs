//! Process operations.

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{ListBody, PageRequest, truncate};
use super::validate::parse_list;
use crate::models::ProcessResponse;

impl PlanfixClient {
    pub async fn list_processes(&self, page: PageRequest) -> ApiResult<Vec<ProcessResponse>> {
        let payload = self.post("process/list", &ListBody::new(page)).await?;
        Ok(truncate(parse_list(&payload, "processes")?, page))
    }
}

#[cfg(test)]
#[path = "processes_test.rs"]
mod processes_test;
