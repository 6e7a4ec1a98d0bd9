//! User (employee) operations.

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{ListBody, PageRequest, resolve_fields, truncate};
use super::validate::{parse_entity, parse_list};
use crate::models::{USER_DEFAULT_FIELDS, USER_LIST_FIELDS, UserResponse};

impl PlanfixClient {
    /// `user_id` is the numeric id or a prefixed form such as `user:5`.
    pub async fn get_user(&self, user_id: &str, fields: Option<&str>) -> ApiResult<UserResponse> {
        let fields = resolve_fields(fields, USER_DEFAULT_FIELDS);
        let payload = self
            .get(&format!("user/{user_id}"), &[("fields", fields)])
            .await?;
        parse_entity(&payload, "user")
    }

    pub async fn list_employees(&self, page: PageRequest) -> ApiResult<Vec<UserResponse>> {
        let body = ListBody::new(page).fields(USER_LIST_FIELDS);
        let payload = self.post("user/list", &body).await?;
        Ok(truncate(parse_list(&payload, "users")?, page))
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;
