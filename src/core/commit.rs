//! Writing dirty rows back, one independent PATCH per row.

use crate::api::{ShiftApi, ShiftPatch};
use crate::core::dirty::DirtyRow;
use crate::models::{RowId, ShiftField, ShiftType};
use crate::utils::time::normalize_time;
use std::fmt;
use tracing::{info, warn};

/// Why a dirty row was not sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Location missing, not numeric, or not positive.
    InvalidReference,
    MissingShiftType,
    InvalidShiftType(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidReference => f.write_str("invalid reference"),
            SkipReason::MissingShiftType => f.write_str("missing shift type"),
            SkipReason::InvalidShiftType(v) => write!(f, "invalid shift type '{v}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub row_id: RowId,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkip {
    pub row_id: RowId,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub committed: Vec<RowId>,
    pub failed: Vec<RowFailure>,
    pub skipped: Vec<RowSkip>,
}

/// Aggregate result shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    NothingToCommit,
    AllSucceeded {
        committed: usize,
    },
    PartialFailure {
        committed: usize,
        failed: usize,
        skipped: usize,
    },
}

impl CommitReport {
    pub fn outcome(&self) -> CommitOutcome {
        let (committed, failed, skipped) =
            (self.committed.len(), self.failed.len(), self.skipped.len());

        if committed + failed + skipped == 0 {
            CommitOutcome::NothingToCommit
        } else if failed + skipped == 0 {
            CommitOutcome::AllSucceeded { committed }
        } else {
            CommitOutcome::PartialFailure {
                committed,
                failed,
                skipped,
            }
        }
    }
}

impl fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitOutcome::NothingToCommit => f.write_str("Nothing to save."),
            CommitOutcome::AllSucceeded { committed } => {
                write!(f, "All changes saved ({committed} row(s)).")
            }
            CommitOutcome::PartialFailure {
                committed,
                failed,
                skipped,
            } => write!(
                f,
                "Some changes were not saved: {committed} saved, {failed} failed, {skipped} skipped."
            ),
        }
    }
}

/// Validate cross-field rules and build the normalized PATCH body.
pub fn build_patch(row: &DirtyRow) -> Result<ShiftPatch, SkipReason> {
    let location_id = row
        .value(ShiftField::LocationId)
        .as_i64()
        .filter(|id| *id > 0)
        .ok_or(SkipReason::InvalidReference)?;

    let raw_type = row.value(ShiftField::ShiftType).canonical();
    if raw_type.trim().is_empty() {
        return Err(SkipReason::MissingShiftType);
    }
    let shift_type =
        ShiftType::from_code(&raw_type).ok_or(SkipReason::InvalidShiftType(raw_type))?;

    Ok(ShiftPatch {
        shift_type,
        location_id,
        custom_start_time: normalize_time(&row.value(ShiftField::CustomStartTime).canonical()),
        custom_end_time: normalize_time(&row.value(ShiftField::CustomEndTime).canonical()),
        notes: row.value(ShiftField::Notes).canonical(),
    })
}

pub struct CommitDriver;

impl CommitDriver {
    /// Attempt every dirty row, in order, without stopping on failures.
    ///
    /// There is no cross-row atomicity: rows written before a failure stay
    /// written.
    pub fn commit<A: ShiftApi + ?Sized>(api: &A, dirty: &[DirtyRow]) -> CommitReport {
        let mut report = CommitReport::default();

        for row in dirty {
            let patch = match build_patch(row) {
                Ok(p) => p,
                Err(reason) => {
                    warn!(row_id = row.id, %reason, "row skipped");
                    report.skipped.push(RowSkip {
                        row_id: row.id,
                        reason,
                    });
                    continue;
                }
            };

            match api.patch_shift(row.id, &patch) {
                Ok(()) => {
                    info!(row_id = row.id, "row saved");
                    report.committed.push(row.id);
                }
                Err(e) => {
                    warn!(row_id = row.id, error = %e, "row write failed");
                    report.failed.push(RowFailure {
                        row_id: row.id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
