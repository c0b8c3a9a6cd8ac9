//! Pure projection of (edit mode, buffer, snapshot) into per-cell render
//! instructions. No network access.

use crate::core::buffer::EditBuffer;
use crate::core::snapshot::Snapshot;
use crate::models::{DriverShift, FieldValue, RowId, ShiftField, ShiftType};
use crate::utils::time::display_time;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Read-only display text.
    Text(String),
    /// Bound input; `trigger` inputs re-derive other fields when changed.
    Input {
        field: ShiftField,
        value: String,
        trigger: bool,
    },
}

impl Cell {
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Input { value, .. } => format!("[{value}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RowId,
    pub driver: String,
    pub date: String,
    /// One cell per `ShiftField::ALL`, same order.
    pub cells: Vec<Cell>,
}

pub fn project(edit_mode: bool, buffer: &EditBuffer, snapshot: &Snapshot) -> Vec<RowView> {
    snapshot
        .rows()
        .iter()
        .map(|row| RowView {
            id: row.id,
            driver: row.driver_label(),
            date: row.date.clone().unwrap_or_default(),
            cells: ShiftField::ALL
                .iter()
                .map(|f| {
                    if edit_mode {
                        input_cell(buffer, row, *f)
                    } else {
                        Cell::Text(read_only_text(row, *f))
                    }
                })
                .collect(),
        })
        .collect()
}

fn input_cell(buffer: &EditBuffer, row: &DriverShift, field: ShiftField) -> Cell {
    let value = buffer
        .value(row.id, field)
        .cloned()
        .unwrap_or_else(|| row.field(field));

    Cell::Input {
        field,
        value: value.canonical(),
        trigger: field.is_trigger(),
    }
}

fn read_only_text(row: &DriverShift, field: ShiftField) -> String {
    match field {
        ShiftField::ShiftType => row
            .shift_type
            .as_ref()
            .map(ShiftType::label)
            .unwrap_or("-")
            .to_string(),
        ShiftField::CustomStartTime => display_time(row.custom_start_time.as_deref()),
        ShiftField::CustomEndTime => display_time(row.custom_end_time.as_deref()),
        ShiftField::LocationId => match (&row.location_name, row.location_id) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(id)) => format!("#{id}"),
            _ => "-".to_string(),
        },
        ShiftField::Notes => row.notes.clone().unwrap_or_default(),
    }
}

/// Handle an input change: store the value and, for trigger fields, the
/// derived defaults.
pub fn on_cell_change(buffer: &mut EditBuffer, row_id: RowId, field: ShiftField, value: FieldValue) {
    if field.is_trigger() {
        buffer.apply_derived_defaults(row_id, field, &value);
    }
    buffer.update_field(row_id, field, value);
}
