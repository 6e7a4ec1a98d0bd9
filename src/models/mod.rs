//! Planfix request and response schemas.
//!
//! Request types only carry fields a client may set and omit every unset
//! optional field on the wire. Response types make almost every field
//! optional because Planfix returns only the fields that were asked for.
//! Unknown keys are ignored so field additions on the server side do not
//! break decoding.

mod comment;
mod common;
mod contact;
mod error;
mod file;
mod filter;
mod process;
mod project;
mod report;
mod task;
mod user;


pub use comment::{
    COMMENT_DEFAULT_FIELDS, COMMENT_LIST_FIELDS, CommentCreateRequest, CommentResponse,
    CommentUpdateRequest,
};
pub use common::{
    BaseEntity, CompanyEntity, CreatedId, CustomField, CustomFieldValueRequest,
    CustomFieldValueResponse, DataTag, DataTagEntryResponse, DateValue, DurationType,
    DurationUnit, EntityId, FileRequest, Gender, GroupRequest, GroupResponse, NotifiedRequest,
    PeopleRequest, PeopleResponse, PersonRequest, PersonResponse, PhoneRequest, PhoneResponse,
    Priority, Recurrence, Reminder, ShortEntity, TaskStatus, TimePoint,
};
pub use contact::{CONTACT_ALL_FIELDS, CONTACT_DEFAULT_FIELDS, ContactRequest, ContactResponse};
pub use error::ApiResponseError;
pub use file::{FILE_DEFAULT_FIELDS, FileResponse};
pub use filter::{
    CONTACT_FILTER_NAME, ContactFilter, Filter, FilterOperator, STATUS_COMPLETED, StatusFilter,
    TASK_FILTER_ASSIGNEE, TASK_FILTER_NAME, TASK_FILTER_PROJECT, TASK_FILTER_STATUS, TaskFilter,
};
pub use process::ProcessResponse;
pub use project::{
    PROJECT_DEFAULT_FIELDS, PROJECT_LIST_FIELDS, ProjectRequest, ProjectResponse,
    ProjectUpdateRequest,
};
pub use report::{Report, ReportData, ReportDataItem, ReportDataRow, ReportField};
pub use task::{TASK_DEFAULT_FIELDS, TaskCreateRequest, TaskResponse, TaskUpdateRequest};
pub use user::{USER_DEFAULT_FIELDS, USER_LIST_FIELDS, UserResponse};
