use crate::api::{HttpClient, JournalApi, fetch_all_shifts};
use crate::cli::commands::shifts::build_filter;
use crate::cli::parser::{JournalCommand, ShiftsCommand};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ShiftExport, flatten_journal};
use crate::ui::messages::{error, info};
use crate::utils::date::parse_range;
use crate::utils::path::resolve_output;

pub fn handle_shifts(cmd: &ShiftsCommand, cfg: &Config) -> AppResult<()> {
    let ShiftsCommand::Export {
        date,
        q,
        format,
        file,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let path = resolve_output(file, cfg.export_dir.as_deref());
    let filter = build_filter(cfg, date, q, 1, None)?;
    let api = HttpClient::new(cfg)?;

    let shifts = match fetch_all_shifts(&api, &filter) {
        Ok(rows) => rows,
        Err(e) => {
            error(format!("Fetch error: {e}"));
            return Err(e);
        }
    };
    info(format!("{} shift(s) fetched for {}", shifts.len(), filter.date));

    let rows: Vec<ShiftExport> = shifts.iter().map(ShiftExport::from).collect();
    ExportLogic::write(*format, &rows, &path, "Driver shifts", *force)
}

pub fn handle_journal(cmd: &JournalCommand, cfg: &Config) -> AppResult<()> {
    let JournalCommand::Export {
        range,
        format,
        file,
        force,
    } = cmd;

    let (start, end) = parse_range(range)?;
    let path = resolve_output(file, cfg.export_dir.as_deref());
    let api = HttpClient::new(cfg)?;

    let entries = match api.list_journal(start, end) {
        Ok(e) => e,
        Err(e) => {
            error(format!("Fetch error: {e}"));
            return Err(e);
        }
    };
    info(format!("{} journal entr(ies) from {start} to {end}", entries.len()));

    let rows = flatten_journal(&entries);
    ExportLogic::write(*format, &rows, &path, "Jurnal Umum", *force)
}
