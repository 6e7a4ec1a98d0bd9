//! Report operations.

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{ListBody, PageRequest, truncate};
use super::validate::parse_list;
use crate::models::Report;

impl PlanfixClient {
    pub async fn list_reports(&self, page: PageRequest) -> ApiResult<Vec<Report>> {
        let payload = self.post("report/list", &ListBody::new(page)).await?;
        Ok(truncate(parse_list(&payload, "reports")?, page))
    }
}

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;
