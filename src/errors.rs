//! Unified application error type.
//! All modules (api, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backend / HTTP
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing API token: run `transgo-admin init` or pass --token")]
    MissingToken,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid edit expression: {0}")]
    InvalidEdit(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Row {0} is not part of the current snapshot")]
    UnknownRow(i64),

    #[error("Not in edit mode")]
    NotEditing,

    #[error("Some changes were not saved: {failed} failed, {skipped} skipped")]
    PartialCommit { failed: usize, skipped: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
