//! Pagination shared by the list tools.
//!
//! Tools accept either `offset`/`limit` or a 1-based `page`/`limit`; a page
//! wins when both are given.

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_PAGE_SIZE, PageRequest};

pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PageParams {
    #[schemars(description = "Number of records to skip (0-based, default 0)")]
    pub offset: Option<i64>,
    #[schemars(description = "Maximum number of records to return, 1-100 (default 20)")]
    pub limit: Option<i64>,
    #[schemars(description = "Page number, 1-based. Overrides offset when given")]
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
    pub page: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
            page: None,
        }
    }
}

impl Pagination {
    /// Checks the raw parameters, pushing one message per bad field.
    pub fn resolve(params: &PageParams, errors: &mut Vec<String>) -> Self {
        let limit = match params.limit {
            None => DEFAULT_PAGE_SIZE,
            Some(limit) if (1..=i64::from(MAX_LIMIT)).contains(&limit) => limit as u32,
            Some(limit) => {
                errors.push(format!("limit must be between 1 and {MAX_LIMIT} (got {limit})"));
                DEFAULT_PAGE_SIZE
            }
        };

        let page = match params.page {
            None => None,
            Some(page) => match u32::try_from(page) {
                Ok(page) if page >= 1 => Some(page),
                _ => {
                    errors.push(format!("page must be at least 1 (got {page})"));
                    None
                }
            },
        };

        let offset = match params.offset {
            None => 0,
            Some(offset) => u32::try_from(offset).unwrap_or_else(|_| {
                errors.push(format!("offset must be at least 0 (got {offset})"));
                0
            }),
        };

        let offset = match page {
            // The next page and its offset must still fit.
            Some(page) => match page.checked_add(1).and(page.checked_mul(limit)) {
                Some(_) => (page - 1) * limit,
                None => {
                    errors.push(format!("page is too large (got {page})"));
                    0
                }
            },
            None => offset,
        };
        let offset = match offset.checked_add(limit) {
            Some(_) => offset,
            None => {
                errors.push(format!("offset is too large (got {offset})"));
                0
            }
        };

        Self {
            offset,
            limit,
            page,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.offset, self.limit)
    }

    /// Footer printed under a listing of `count` items.
    ///
    /// A full page hints at the next offset (and page); a short one reports
    /// the total.
    pub fn footer(&self, count: usize, noun: &str, filters: &[String]) -> String {
        if count < self.limit as usize {
            return if filters.is_empty() {
                format!("Total found: {count} {noun}")
            } else {
                format!("Total found: {count} {noun} ({})", filters.join(", "))
            };
        }

        let mut limit = format!("limit: {}", self.limit);
        for filter in filters {
            limit.push_str(", ");
            limit.push_str(filter);
        }

        let next_offset = self.offset.saturating_add(self.limit);
        let (position, next) = match self.page {
            Some(page) => (
                format!("page {page}"),
                format!("offset={next_offset} or page={}", page.saturating_add(1)),
            ),
            None => (
                format!("offset {}", self.offset),
                format!("offset={next_offset}"),
            ),
        };
        format!(
            "Showing {count} results ({limit}), {position}. More may exist: use {next} to fetch the next page."
        )
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;
