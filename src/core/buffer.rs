//! Per-row field overrides collected while in edit mode.

use crate::models::{DriverShift, FieldValue, RowId, ShiftField, ShiftType};
use std::collections::BTreeMap;

/// Field overrides for one row. Keys are `ShiftField`s, so they are always a
/// subset of the row's editable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowPatch {
    fields: BTreeMap<ShiftField, FieldValue>,
}

impl RowPatch {
    /// Patch seeded with every editable value of `row`, so untouched fields
    /// round-trip unchanged on commit.
    pub fn seeded(row: &DriverShift) -> Self {
        let fields = ShiftField::ALL
            .iter()
            .map(|f| (*f, row.field(*f)))
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: ShiftField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn set(&mut self, field: ShiftField, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShiftField, &FieldValue)> {
        self.fields.iter().map(|(f, v)| (*f, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Sparse map row id → overrides. Lives for one edit session only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBuffer {
    entries: BTreeMap<RowId, RowPatch>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh buffer with one seeded entry per row.
    ///
    /// Any previous buffer is simply replaced by the returned one.
    pub fn enter_edit_mode(rows: &[DriverShift]) -> Self {
        let entries = rows.iter().map(|r| (r.id, RowPatch::seeded(r))).collect();
        Self { entries }
    }

    /// Set one field. Creates the row entry on first edit.
    pub fn update_field(&mut self, row_id: RowId, field: ShiftField, value: FieldValue) {
        self.entries.entry(row_id).or_default().set(field, value);
    }

    /// Fill fields implied by a trigger value (shift type → start/end times).
    ///
    /// Deterministic: the same trigger value always yields the same times.
    /// Non-trigger fields, unknown shift types and `custom` leave the buffer
    /// untouched.
    pub fn apply_derived_defaults(
        &mut self,
        row_id: RowId,
        trigger_field: ShiftField,
        trigger_value: &FieldValue,
    ) {
        if !trigger_field.is_trigger() {
            return;
        }

        let Some((start, end)) = ShiftType::from_code(&trigger_value.canonical())
            .and_then(|t| t.default_times())
        else {
            return;
        };

        let entry = self.entries.entry(row_id).or_default();
        entry.set(ShiftField::CustomStartTime, FieldValue::text(start));
        entry.set(ShiftField::CustomEndTime, FieldValue::text(end));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, row_id: RowId) -> Option<&RowPatch> {
        self.entries.get(&row_id)
    }

    pub fn value(&self, row_id: RowId, field: ShiftField) -> Option<&FieldValue> {
        self.entries.get(&row_id).and_then(|p| p.get(field))
    }

    /// Entries in ascending row id order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &RowPatch)> {
        self.entries.iter().map(|(id, p)| (*id, p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
