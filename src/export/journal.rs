// src/export/journal.rs

use crate::export::{ColumnKind, ExportRecord};
use crate::models::JournalEntry;
use serde::Serialize;

/// Label of the closing row carrying the debit/credit sums.
pub const TOTAL_LABEL: &str = "TOTAL";

/// One posting line of the general journal, flattened for tables.
///
/// Entry-level columns (date, reference, description) are only filled on the
/// first line of each entry.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct JournalRow {
    pub date: String,
    pub reference: String,
    pub description: String,
    pub account_code: String,
    pub account_name: String,
    pub debit: f64,
    pub credit: f64,
}

impl ExportRecord for JournalRow {
    fn headers() -> &'static [&'static str] {
        &[
            "date",
            "reference",
            "description",
            "account_code",
            "account_name",
            "debit",
            "credit",
        ]
    }

    fn kinds() -> &'static [ColumnKind] {
        &[
            ColumnKind::Date,
            ColumnKind::Text,
            ColumnKind::Text,
            ColumnKind::Text,
            ColumnKind::Text,
            ColumnKind::Number,
            ColumnKind::Number,
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.reference.clone(),
            self.description.clone(),
            self.account_code.clone(),
            self.account_name.clone(),
            format!("{:.2}", self.debit),
            format!("{:.2}", self.credit),
        ]
    }
}

/// Flatten entries into one row per line, plus a trailing `TOTAL` row.
///
/// An entry without lines still yields one row so it stays visible.
/// No entries → no rows (not even the total).
pub fn flatten_journal(entries: &[JournalEntry]) -> Vec<JournalRow> {
    let mut rows = Vec::new();
    let mut total_debit = 0.0;
    let mut total_credit = 0.0;

    for entry in entries {
        let header = || {
            (
                entry.date.clone(),
                entry.reference.clone().unwrap_or_default(),
                entry.description.clone().unwrap_or_default(),
            )
        };

        if entry.lines.is_empty() {
            let (date, reference, description) = header();
            rows.push(JournalRow {
                date,
                reference,
                description,
                account_code: String::new(),
                account_name: String::new(),
                debit: 0.0,
                credit: 0.0,
            });
            continue;
        }

        for (i, line) in entry.lines.iter().enumerate() {
            let (date, reference, description) = if i == 0 {
                header()
            } else {
                Default::default()
            };

            total_debit += line.debit;
            total_credit += line.credit;

            rows.push(JournalRow {
                date,
                reference,
                description,
                account_code: line.account_code.clone().unwrap_or_default(),
                account_name: line.account_name.clone().unwrap_or_default(),
                debit: line.debit,
                credit: line.credit,
            });
        }
    }

    if !rows.is_empty() {
        rows.push(JournalRow {
            date: String::new(),
            reference: String::new(),
            description: TOTAL_LABEL.to_string(),
            account_code: String::new(),
            account_name: String::new(),
            debit: total_debit,
            credit: total_credit,
        });
    }

    rows
}
