use crate::api::HttpClient;
use crate::cli::commands::shifts::{build_filter, print_snapshot, render_views};
use crate::cli::parser::ShiftsCommand;
use crate::config::Config;
use crate::core::commit::build_patch;
use crate::core::{CommitOutcome, EditSession, SaveResult};
use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, RowId, ShiftField};
use crate::ui::messages::{error, header, info, success, warning};

/// One `--set ID:FIELD=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArg {
    pub row_id: RowId,
    pub field: ShiftField,
    pub value: FieldValue,
}

/// Parse `ID:FIELD=VALUE`. The value may itself contain `:` and `=`.
pub fn parse_edit(expr: &str) -> AppResult<EditArg> {
    let invalid = || AppError::InvalidEdit(expr.to_string());

    let (id_raw, rest) = expr.split_once(':').ok_or_else(invalid)?;
    let (field_raw, value_raw) = rest.split_once('=').ok_or_else(invalid)?;

    let row_id: RowId = id_raw.trim().parse().map_err(|_| invalid())?;
    let field = ShiftField::from_name(field_raw)?;
    let value = field.parse_value(value_raw)?;

    Ok(EditArg {
        row_id,
        field,
        value,
    })
}

pub fn handle(cmd: &ShiftsCommand, cfg: &Config) -> AppResult<()> {
    let ShiftsCommand::Edit {
        date,
        set,
        q,
        page,
        limit,
        dry_run,
    } = cmd
    else {
        return Ok(());
    };

    // parse everything before touching the network
    let edits = set
        .iter()
        .map(|s| parse_edit(s))
        .collect::<AppResult<Vec<_>>>()?;

    let filter = build_filter(cfg, date, q, *page, *limit)?;
    let api = HttpClient::new(cfg)?;

    let mut session = EditSession::new(filter);
    if let Err(e) = session.load(&api) {
        error(format!("Fetch error: {e}"));
        return Err(e);
    }

    session.enter_edit_mode();
    for e in edits {
        session.edit(e.row_id, e.field, e.value)?;
    }

    if *dry_run {
        preview(&session);
        session.cancel();
        return Ok(());
    }

    let result = session.save(&api)?;
    report(&result);

    if !result.report.committed.is_empty() && result.refresh_error.is_none() {
        print_snapshot(session.snapshot(), &session.view());
    }

    match result.report.outcome() {
        CommitOutcome::PartialFailure {
            failed, skipped, ..
        } => Err(AppError::PartialCommit { failed, skipped }),
        _ => Ok(()),
    }
}

/// Dry run: edit view plus the payload each dirty row would send.
fn preview(session: &EditSession) {
    header("Edit preview");
    println!("{}", render_views(&session.view()));

    let dirty = session.dirty_rows();
    if dirty.is_empty() {
        info("Nothing to save.");
        return;
    }

    for row in &dirty {
        let changed: Vec<&str> = row.changed.iter().map(|f| f.as_str()).collect();
        match build_patch(row) {
            Ok(patch) => info(format!(
                "row {}: {} → PATCH {}",
                row.id,
                changed.join(", "),
                serde_json::to_string(&patch).unwrap_or_default()
            )),
            Err(reason) => warning(format!("row {} would be skipped: {reason}", row.id)),
        }
    }
}

fn report(result: &SaveResult) {
    let outcome = result.report.outcome();

    match outcome {
        CommitOutcome::NothingToCommit => info(outcome),
        CommitOutcome::AllSucceeded { .. } => success(outcome),
        CommitOutcome::PartialFailure { .. } => warning(outcome),
    }

    for f in &result.report.failed {
        error(format!("row {} failed: {}", f.row_id, f.reason));
    }
    for s in &result.report.skipped {
        warning(format!("row {} skipped: {}", s.row_id, s.reason));
    }
    if let Some(e) = &result.refresh_error {
        warning(format!("Changes saved but the list could not be reloaded: {e}"));
    }
}
