// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportRecord};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `path` in the requested format.
    ///
    /// - `path` must be absolute
    /// - an existing file is overwritten only with `force` (or after confirmation)
    /// - `sheet` names the worksheet for XLSX
    pub fn write<T: ExportRecord>(
        format: ExportFormat,
        rows: &[T],
        path: &Path,
        sheet: &str,
        force: bool,
    ) -> AppResult<()> {
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                path.display()
            )));
        }

        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        if rows.is_empty() {
            warning("No rows found for the selected filter.");
        }

        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
            ExportFormat::Xlsx => export_xlsx(rows, path, sheet),
        }
    }
}
