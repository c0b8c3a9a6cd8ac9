//! Dirty detection: which buffered rows actually differ from the snapshot.

use crate::core::buffer::EditBuffer;
use crate::core::snapshot::Snapshot;
use crate::models::{FieldValue, RowId, ShiftField};
use std::collections::BTreeMap;

/// A row whose buffer entry differs from its snapshot copy in at least one field.
#[derive(Debug, Clone, PartialEq)]
pub struct DirtyRow {
    pub id: RowId,
    /// Fields that differ, in column order.
    pub changed: Vec<ShiftField>,
    /// Effective values: snapshot row overlaid with the buffer entry.
    pub values: BTreeMap<ShiftField, FieldValue>,
}

impl DirtyRow {
    pub fn value(&self, field: ShiftField) -> FieldValue {
        self.values.get(&field).cloned().unwrap_or_default()
    }
}

/// Compare every buffer entry against the snapshot.
///
/// Entries whose row has left the snapshot are skipped. Rows with zero
/// differing fields are not returned, so they never produce a write.
pub fn diff(snapshot: &Snapshot, buffer: &EditBuffer) -> Vec<DirtyRow> {
    let mut out = Vec::new();

    for (id, patch) in buffer.iter() {
        let Some(row) = snapshot.get(id) else {
            continue;
        };

        let changed: Vec<ShiftField> = patch
            .iter()
            .filter(|(field, value)| !value.same_as(&row.field(*field), *field))
            .map(|(field, _)| field)
            .collect();

        if changed.is_empty() {
            continue;
        }

        let mut values: BTreeMap<ShiftField, FieldValue> = ShiftField::ALL
            .iter()
            .map(|f| (*f, row.field(*f)))
            .collect();
        for (field, value) in patch.iter() {
            values.insert(field, value.clone());
        }

        out.push(DirtyRow {
            id,
            changed,
            values,
        });
    }

    out
}
