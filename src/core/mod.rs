//! Edit-and-reconcile core: snapshot, edit buffer, dirty detection, commit,
//! view projection.

pub mod browse;
pub mod buffer;
pub mod commit;
pub mod debounce;
pub mod dirty;
pub mod session;
pub mod snapshot;
pub mod view;

pub use browse::{BrowseEvent, run_browse};
pub use buffer::{EditBuffer, RowPatch};
pub use commit::{CommitDriver, CommitOutcome, CommitReport, RowFailure, RowSkip, SkipReason};
pub use debounce::SearchDebouncer;
pub use dirty::{DirtyRow, diff};
pub use session::{EditSession, SaveResult};
pub use snapshot::{FetchApplied, FetchTicket, Snapshot, SnapshotStore};
pub use view::{Cell, RowView, on_cell_change, project};
