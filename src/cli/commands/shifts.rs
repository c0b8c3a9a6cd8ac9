use crate::api::{HttpClient, ShiftFilter};
use crate::cli::commands::{browse, edit, export};
use crate::cli::parser::ShiftsCommand;
use crate::config::Config;
use crate::core::{EditBuffer, RowView, Snapshot, SnapshotStore, project};
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info};
use crate::utils::date::resolve_date;
use crate::utils::table::Table;

pub fn handle(cmd: &ShiftsCommand, cfg: &Config) -> AppResult<()> {
    match cmd {
        ShiftsCommand::List {
            date,
            q,
            page,
            limit,
        } => {
            let filter = build_filter(cfg, date, q, *page, *limit)?;
            list(cfg, &filter)
        }
        ShiftsCommand::Edit { .. } => edit::handle(cmd, cfg),
        ShiftsCommand::Browse { .. } => browse::handle(cmd, cfg),
        ShiftsCommand::Export { .. } => export::handle_shifts(cmd, cfg),
    }
}

/// Filter from CLI arguments; the page size defaults to the configured one.
pub(crate) fn build_filter(
    cfg: &Config,
    date: &str,
    q: &str,
    page: u32,
    limit: Option<u32>,
) -> AppResult<ShiftFilter> {
    let d = resolve_date(date)?;
    let filter = ShiftFilter::new(d, limit.unwrap_or(cfg.page_limit).max(1));
    Ok(filter.with_query(q).with_page(page))
}

fn list(cfg: &Config, filter: &ShiftFilter) -> AppResult<()> {
    let api = HttpClient::new(cfg)?;
    let mut store = SnapshotStore::new();

    if let Err(e) = store.fetch(&api, filter) {
        error(format!("Fetch error: {e}"));
        return Err(e);
    }

    print_snapshot(store.snapshot(), &project(false, &EditBuffer::new(), store.snapshot()));
    Ok(())
}

/// Title line plus table for a projected snapshot.
pub(crate) fn print_snapshot(snapshot: &Snapshot, views: &[RowView]) {
    let title = match snapshot.filter() {
        Some(f) if !f.q.is_empty() => format!(
            "Driver shifts {} – \"{}\" (page {}/{}, {} items)",
            f.date,
            f.q,
            f.page,
            snapshot.total_pages().max(1),
            snapshot.total_items()
        ),
        Some(f) => format!(
            "Driver shifts {} (page {}/{}, {} items)",
            f.date,
            f.page,
            snapshot.total_pages().max(1),
            snapshot.total_items()
        ),
        None => "Driver shifts".to_string(),
    };
    header(title);

    if views.is_empty() {
        info("No shifts found.");
        return;
    }

    println!("{}", render_views(views));
}

pub(crate) fn render_views(views: &[RowView]) -> String {
    let mut table =
        Table::with_headers(&["ID", "Date", "Driver", "Shift", "Start", "End", "Location", "Notes"]);

    for v in views {
        let mut row = vec![v.id.to_string(), v.date.clone(), v.driver.clone()];
        row.extend(v.cells.iter().map(|c| c.display()));
        table.add_row(row);
    }

    table.render()
}
