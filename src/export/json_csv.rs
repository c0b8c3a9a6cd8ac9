// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportRecord, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render records as CSV text: header row first, fields containing commas,
/// quotes or newlines are quoted with inner quotes doubled.
pub fn to_csv_string<T: ExportRecord>(rows: &[T]) -> AppResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    wtr.write_record(T::headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in rows {
        wtr.write_record(row.to_row())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

pub(crate) fn export_csv<T: ExportRecord>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let content = to_csv_string(rows)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: ExportRecord>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
