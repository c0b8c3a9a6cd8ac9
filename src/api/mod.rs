//! REST backend boundary: wire shapes and the traits the core talks to.

pub mod client;

pub use client::HttpClient;

use crate::errors::AppResult;
use crate::models::{DriverShift, JournalEntry, RowId, ShiftType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Filter state for one driver-shift listing.
///
/// Serialized as the query string of `GET /driver-shifts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftFilter {
    pub date: NaiveDate,
    #[serde(default)]
    pub q: String,
    pub page: u32,
    pub limit: u32,
}

impl ShiftFilter {
    pub fn new(date: NaiveDate, limit: u32) -> Self {
        Self {
            date,
            q: String::new(),
            page: 1,
            limit,
        }
    }

    /// A new search always restarts from the first page.
    pub fn with_query(&self, q: &str) -> Self {
        Self {
            q: q.trim().to_string(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub total_items: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_page: u32,
}

/// Body of `GET /driver-shifts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftPage {
    #[serde(default)]
    pub items: Vec<DriverShift>,
    #[serde(default)]
    pub meta: PageMeta,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Body of `PATCH /driver-shifts/{id}`.
///
/// Times are `HH:MM` or null; every field is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPatch {
    pub shift_type: ShiftType,
    pub location_id: i64,
    pub custom_start_time: Option<String>,
    pub custom_end_time: Option<String>,
    pub notes: String,
}

/// Body of `GET /jurnal-umum`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalPage {
    #[serde(default)]
    pub items: Vec<JournalEntry>,
}

/// Driver-shift endpoints.
pub trait ShiftApi {
    fn list_shifts(&self, filter: &ShiftFilter) -> AppResult<ShiftPage>;

    fn patch_shift(&self, id: RowId, patch: &ShiftPatch) -> AppResult<()>;
}

/// General journal endpoint.
pub trait JournalApi {
    fn list_journal(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<JournalEntry>>;
}

/// Upper bound on pages walked by `fetch_all_shifts`.
const MAX_PAGES: u32 = 500;

/// Walk every page of a listing, starting from page 1.
pub fn fetch_all_shifts<A: ShiftApi + ?Sized>(
    api: &A,
    filter: &ShiftFilter,
) -> AppResult<Vec<DriverShift>> {
    let mut rows = Vec::new();
    let mut page_no = 1;

    loop {
        let page = api.list_shifts(&filter.with_page(page_no))?;
        let last = page.items.is_empty() || page_no >= page.pagination.total_page;
        rows.extend(page.items);

        if last {
            break;
        }
        if page_no >= MAX_PAGES {
            warn!(
                max_pages = MAX_PAGES,
                total_page = page.pagination.total_page,
                rows = rows.len(),
                "listing truncated at page cap"
            );
            break;
        }
        page_no += 1;
    }

    Ok(rows)
}
