//! Contact schemas. A contact is either a person or a company (`isCompany`).

use serde::{Deserialize, Serialize};

use super::common::{
    BaseEntity, CompanyEntity, CustomFieldValueRequest, CustomFieldValueResponse,
    DataTagEntryResponse, DateValue, FileRequest, Gender, GroupRequest, GroupResponse,
    PeopleRequest, PeopleResponse, PersonResponse, PhoneRequest, PhoneResponse, ShortEntity,
    TimePoint,
};
use super::file::FileResponse;

/// Short field set used for lists and plain lookups.
pub const CONTACT_DEFAULT_FIELDS: &str =
    "id,name,midname,lastname,email,phones,position,description,isCompany,createdDate";

/// Every documented system field, used for the detailed view.
pub const CONTACT_ALL_FIELDS: &str = "id,template,name,midname,lastname,gender,description,\
address,site,email,additionalEmailAddresses,skype,telegramId,telegram,facebook,instagram,vk,\
position,group,isCompany,isDeleted,birthDate,createdDate,dateOfLastUpdate,supervisors,phones,\
companies,contacts,files,dataTags,sourceObjectId,sourceDataVersion";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<BaseEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_email_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_company: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisors: Option<PeopleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<PhoneRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<BaseEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<BaseEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueRequest>>,
}

impl ContactRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ShortEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_email_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_company: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_last_update: Option<TimePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisors: Option<PeopleResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<PhoneResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<CompanyEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<PersonResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_tags: Option<Vec<DataTagEntryResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_data: Option<Vec<CustomFieldValueResponse>>,
}

impl ContactResponse {
    /// First, middle and last name joined, or `None` when all are empty.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.name, &self.midname, &self.lastname]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    pub fn first_phone(&self) -> Option<&str> {
        self.phones
            .as_ref()?
            .iter()
            .find_map(|phone| phone.number.as_deref())
    }

    /// Comma-separated names of linked companies.
    pub fn company_names(&self) -> Option<String> {
        let names: Vec<&str> = self
            .companies
            .as_ref()?
            .iter()
            .filter_map(|company| company.name.as_deref())
            .collect();
        (!names.is_empty()).then(|| names.join(", "))
    }
}
