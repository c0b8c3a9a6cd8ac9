// src/export/mod.rs

mod excel_date;
mod fs_utils;
pub mod journal;
mod json_csv;
pub mod logic;
pub mod model;
mod xlsx;

pub use journal::{JournalRow, flatten_journal};
pub use json_csv::to_csv_string;
pub use logic::ExportLogic;
pub use model::ShiftExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

/// How a column is written to a spreadsheet cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    Time,
}

/// A flat record that can be exported as a table row.
pub trait ExportRecord: Serialize {
    fn headers() -> &'static [&'static str];

    /// One kind per header.
    fn kinds() -> &'static [ColumnKind];

    /// Cell texts, same order as `headers()`.
    fn to_row(&self) -> Vec<String>;
}
