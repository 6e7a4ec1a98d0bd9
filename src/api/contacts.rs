//! Contact operations.

use tracing::info;

use super::client::PlanfixClient;
use super::error::ApiResult;
use super::query::{ContactQuery, ListBody, resolve_fields, truncate};
use super::validate::{parse_entity, parse_list, parse_root};
use crate::models::{
    CONTACT_ALL_FIELDS, CONTACT_DEFAULT_FIELDS, ContactFilter, ContactRequest, ContactResponse,
    CreatedId,
};

impl PlanfixClient {
    /// Contact with the short default field set.
    pub async fn get_contact(&self, contact_id: i64, fields: Option<&str>) -> ApiResult<ContactResponse> {
        self.fetch_contact(contact_id, resolve_fields(fields, CONTACT_DEFAULT_FIELDS))
            .await
    }

    /// Contact with every documented field unless `fields` narrows it.
    pub async fn get_contact_details(
        &self,
        contact_id: i64,
        fields: Option<&str>,
    ) -> ApiResult<ContactResponse> {
        self.fetch_contact(contact_id, resolve_fields(fields, CONTACT_ALL_FIELDS))
            .await
    }

    async fn fetch_contact(&self, contact_id: i64, fields: &str) -> ApiResult<ContactResponse> {
        let payload = self
            .get(&format!("contact/{contact_id}"), &[("fields", fields)])
            .await?;
        parse_entity(&payload, "contact")
    }

    pub async fn list_contacts(&self, query: &ContactQuery) -> ApiResult<Vec<ContactResponse>> {
        let fields = resolve_fields(query.fields.as_deref(), CONTACT_DEFAULT_FIELDS);
        let filters = query
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(ContactFilter::name_contains)
            .into_iter()
            .collect();

        let mut body = ListBody::new(query.page).fields(fields).filters(filters);
        body.is_company = Some(query.is_company);

        let payload = self.post("contact/list", &body).await?;
        let contacts = truncate(parse_list(&payload, "contacts")?, query.page);
        info!(count = contacts.len(), is_company = query.is_company, "Listed contacts");
        Ok(contacts)
    }

    pub async fn search_contacts(
        &self,
        query: &str,
        filter: &ContactQuery,
    ) -> ApiResult<Vec<ContactResponse>> {
        let query = ContactQuery {
            name: Some(query.to_string()),
            ..filter.clone()
        };
        self.list_contacts(&query).await
    }

    pub async fn create_contact(&self, request: &ContactRequest) -> ApiResult<CreatedId> {
        let payload = self.post("contact/", request).await?;
        parse_root(&payload)
    }
}

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;
