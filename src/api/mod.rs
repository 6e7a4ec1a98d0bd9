//! Planfix REST API client.
//!
//! [`PlanfixClient`] owns the transport; the operation methods live in one
//! file per entity and all go through [`validate`] before returning.

mod client;
pub mod error;
mod query;
pub mod validate;

mod comments;
mod contacts;
mod files;
mod processes;
mod projects;
mod reports;
mod tasks;
mod users;

pub use client::PlanfixClient;
pub use error::{ApiError, ApiResult};
pub use query::{CommentQuery, ContactQuery, DEFAULT_PAGE_SIZE, FileQuery, PageRequest, TaskQuery};
