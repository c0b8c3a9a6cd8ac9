use crate::models::field::{FieldValue, ShiftField};
use crate::models::shift_type::ShiftType;
use serde::{Deserialize, Serialize};

pub type RowId = i64;

/// One driver shift as served by `GET /driver-shifts`.
///
/// Read-only copy of a backend record: the client never mutates it, edits go
/// through the edit buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverShift {
    pub id: RowId,
    #[serde(default)]
    pub driver_id: Option<i64>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub shift_type: Option<ShiftType>,
    #[serde(default)]
    pub custom_start_time: Option<String>,
    #[serde(default)]
    pub custom_end_time: Option<String>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DriverShift {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            driver_id: None,
            driver_name: None,
            date: None,
            shift_type: None,
            custom_start_time: None,
            custom_end_time: None,
            location_id: None,
            location_name: None,
            notes: None,
        }
    }

    /// Current value of an editable field.
    pub fn field(&self, field: ShiftField) -> FieldValue {
        match field {
            ShiftField::ShiftType => {
                FieldValue::from_opt_str(self.shift_type.as_ref().map(|t| t.as_str()))
            }
            ShiftField::CustomStartTime => {
                FieldValue::from_opt_str(self.custom_start_time.as_deref())
            }
            ShiftField::CustomEndTime => FieldValue::from_opt_str(self.custom_end_time.as_deref()),
            ShiftField::LocationId => FieldValue::from_opt_i64(self.location_id),
            ShiftField::Notes => FieldValue::from_opt_str(self.notes.as_deref()),
        }
    }

    /// Driver label for tables: name, falling back to the driver id.
    pub fn driver_label(&self) -> String {
        match (&self.driver_name, self.driver_id) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(id)) => format!("#{id}"),
            _ => "-".to_string(),
        }
    }
}
