use crate::api::HttpClient;
use crate::cli::commands::shifts::{build_filter, print_snapshot};
use crate::cli::parser::ShiftsCommand;
use crate::config::Config;
use crate::core::{BrowseEvent, EditBuffer, SearchDebouncer, project, run_browse};
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use std::io;
use std::sync::Arc;

pub fn handle(cmd: &ShiftsCommand, cfg: &Config) -> AppResult<()> {
    let ShiftsCommand::Browse { date, limit } = cmd else {
        return Ok(());
    };

    let filter = build_filter(cfg, date, "", 1, *limit)?;
    let api = Arc::new(HttpClient::new(cfg)?);
    let debouncer = SearchDebouncer::from_millis(cfg.search_debounce_ms);

    info("Type a search and press Enter; Ctrl-D to quit.");

    let input = io::BufReader::new(io::stdin());
    run_browse(api, filter, debouncer, input, |event| match event {
        BrowseEvent::Loaded(snapshot) => {
            print_snapshot(snapshot, &project(false, &EditBuffer::new(), snapshot));
        }
        BrowseEvent::Discarded { q } => {
            info(format!("Results for \"{q}\" arrived late and were ignored."));
        }
        BrowseEvent::Failed { q, error: e } => {
            error(format!("Fetch error for \"{q}\": {e}"));
        }
    });

    Ok(())
}
