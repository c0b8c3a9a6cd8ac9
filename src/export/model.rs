// src/export/model.rs

use crate::export::{ColumnKind, ExportRecord};
use crate::models::DriverShift;
use crate::utils::time::normalize_time;
use serde::Serialize;

/// Flat driver-shift record for CSV / JSON / XLSX.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShiftExport {
    pub id: i64,
    pub date: String,
    pub driver: String,
    pub shift_type: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub notes: String,
}

impl From<&DriverShift> for ShiftExport {
    fn from(r: &DriverShift) -> Self {
        let time = |t: &Option<String>| {
            t.as_deref()
                .map(|v| normalize_time(v).unwrap_or_else(|| v.to_string()))
                .unwrap_or_default()
        };

        Self {
            id: r.id,
            date: r.date.clone().unwrap_or_default(),
            driver: r.driver_name.clone().unwrap_or_default(),
            shift_type: r
                .shift_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            start: time(&r.custom_start_time),
            end: time(&r.custom_end_time),
            location: r
                .location_name
                .clone()
                .or_else(|| r.location_id.map(|id| id.to_string()))
                .unwrap_or_default(),
            notes: r.notes.clone().unwrap_or_default(),
        }
    }
}

impl ExportRecord for ShiftExport {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "date",
            "driver",
            "shift_type",
            "start",
            "end",
            "location",
            "notes",
        ]
    }

    fn kinds() -> &'static [ColumnKind] {
        &[
            ColumnKind::Number,
            ColumnKind::Date,
            ColumnKind::Text,
            ColumnKind::Text,
            ColumnKind::Time,
            ColumnKind::Time,
            ColumnKind::Text,
            ColumnKind::Text,
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.driver.clone(),
            self.shift_type.clone(),
            self.start.clone(),
            self.end.clone(),
            self.location.clone(),
            self.notes.clone(),
        ]
    }
}
