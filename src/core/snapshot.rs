//! Last-fetched driver shifts and the store that replaces them.

use crate::api::{ShiftApi, ShiftFilter, ShiftPage};
use crate::errors::AppResult;
use crate::models::{DriverShift, RowId};
use tracing::{debug, warn};

/// Read-only copy of the rows served for one filter.
///
/// Replaced wholesale on every successful fetch, never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    rows: Vec<DriverShift>,
    filter: Option<ShiftFilter>,
    total_items: u64,
    total_pages: u32,
}

impl Snapshot {
    pub fn from_page(filter: ShiftFilter, page: ShiftPage) -> Self {
        Self {
            rows: page.items,
            filter: Some(filter),
            total_items: page.meta.total_items,
            total_pages: page.pagination.total_page,
        }
    }

    /// Snapshot built from rows already in hand (no paging information).
    pub fn from_rows(rows: Vec<DriverShift>) -> Self {
        let total_items = rows.len() as u64;
        Self {
            rows,
            filter: None,
            total_items,
            total_pages: 1,
        }
    }

    pub fn rows(&self) -> &[DriverShift] {
        &self.rows
    }

    pub fn get(&self, id: RowId) -> Option<&DriverShift> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    pub fn filter(&self) -> Option<&ShiftFilter> {
        self.filter.as_ref()
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    filter: ShiftFilter,
}

impl FetchTicket {
    pub fn filter(&self) -> &ShiftFilter {
        &self.filter
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    Applied,
    /// A newer fetch was started after this one; its result was dropped.
    Stale,
}

/// Owns the current snapshot. Last request wins: only the most recently
/// issued ticket may replace it.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Snapshot,
    issued: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn begin_fetch(&mut self, filter: &ShiftFilter) -> FetchTicket {
        self.issued += 1;
        debug!(seq = self.issued, q = %filter.q, page = filter.page, "fetch started");
        FetchTicket {
            seq: self.issued,
            filter: filter.clone(),
        }
    }

    pub fn is_latest(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Settle a fetch.
    ///
    /// Stale tickets are ignored whatever their outcome. A failure on the latest
    /// ticket keeps the previous snapshot and hands the error back.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: AppResult<ShiftPage>,
    ) -> AppResult<FetchApplied> {
        if !self.is_latest(&ticket) {
            debug!(seq = ticket.seq, latest = self.issued, "stale fetch result discarded");
            return Ok(FetchApplied::Stale);
        }

        match result {
            Ok(page) => {
                debug!(seq = ticket.seq, rows = page.items.len(), "snapshot replaced");
                self.current = Snapshot::from_page(ticket.filter, page);
                Ok(FetchApplied::Applied)
            }
            Err(e) => {
                warn!(seq = ticket.seq, error = %e, "fetch failed, previous snapshot kept");
                Err(e)
            }
        }
    }

    /// Fetch synchronously and replace the snapshot.
    pub fn fetch<A: ShiftApi + ?Sized>(
        &mut self,
        api: &A,
        filter: &ShiftFilter,
    ) -> AppResult<&Snapshot> {
        let ticket = self.begin_fetch(filter);
        let result = api.list_shifts(filter);
        self.complete(ticket, result)?;
        Ok(&self.current)
    }
}
