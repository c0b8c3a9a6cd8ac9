//! One bulk edit over the current driver-shift listing:
//! load → enter edit mode → edit cells → save (or cancel).

use crate::api::{ShiftApi, ShiftFilter};
use crate::core::buffer::EditBuffer;
use crate::core::commit::{CommitDriver, CommitReport};
use crate::core::dirty::{DirtyRow, diff};
use crate::core::snapshot::{Snapshot, SnapshotStore};
use crate::core::view::{RowView, on_cell_change, project};
use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, RowId, ShiftField};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct SaveResult {
    pub report: CommitReport,
    /// Set when rows were saved but reloading the listing failed; the previous
    /// snapshot is still in place.
    pub refresh_error: Option<AppError>,
}

#[derive(Debug)]
pub struct EditSession {
    store: SnapshotStore,
    filter: ShiftFilter,
    buffer: EditBuffer,
    editing: bool,
}

impl EditSession {
    pub fn new(filter: ShiftFilter) -> Self {
        Self {
            store: SnapshotStore::new(),
            filter,
            buffer: EditBuffer::new(),
            editing: false,
        }
    }

    pub fn load<A: ShiftApi + ?Sized>(&mut self, api: &A) -> AppResult<&Snapshot> {
        self.store.fetch(api, &self.filter)
    }

    pub fn filter(&self) -> &ShiftFilter {
        &self.filter
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.store.snapshot()
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Seed the buffer from the current snapshot. Re-entering discards the
    /// previous buffer.
    pub fn enter_edit_mode(&mut self) {
        if self.editing && !self.buffer.is_empty() {
            warn!(entries = self.buffer.len(), "edit mode re-entered, previous edits discarded");
        }
        self.buffer = EditBuffer::enter_edit_mode(self.store.snapshot().rows());
        self.editing = true;
    }

    pub fn edit(&mut self, row_id: RowId, field: ShiftField, value: FieldValue) -> AppResult<()> {
        if !self.editing {
            return Err(AppError::NotEditing);
        }
        if !self.store.snapshot().contains(row_id) {
            return Err(AppError::UnknownRow(row_id));
        }
        on_cell_change(&mut self.buffer, row_id, field, value);
        Ok(())
    }

    pub fn dirty_rows(&self) -> Vec<DirtyRow> {
        diff(self.store.snapshot(), &self.buffer)
    }

    pub fn view(&self) -> Vec<RowView> {
        project(self.editing, &self.buffer, self.store.snapshot())
    }

    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.editing = false;
    }

    /// Commit dirty rows.
    ///
    /// No dirty rows: leave edit mode without any request. Otherwise every
    /// row is attempted; when at least one was saved the listing is reloaded
    /// and the buffer cleared. When none was saved the buffer is kept.
    pub fn save<A: ShiftApi + ?Sized>(&mut self, api: &A) -> AppResult<SaveResult> {
        if !self.editing {
            return Err(AppError::NotEditing);
        }

        let dirty = self.dirty_rows();
        if dirty.is_empty() {
            debug!("no dirty rows, leaving edit mode");
            self.cancel();
            return Ok(SaveResult {
                report: CommitReport::default(),
                refresh_error: None,
            });
        }

        let report = CommitDriver::commit(api, &dirty);

        let mut refresh_error = None;
        if !report.committed.is_empty() {
            self.cancel();
            if let Err(e) = self.store.fetch(api, &self.filter) {
                refresh_error = Some(e);
            }
        }

        Ok(SaveResult {
            report,
            refresh_error,
        })
    }
}
