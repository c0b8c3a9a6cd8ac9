// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_serial, time_serial};
use crate::export::{ColumnKind, ExportRecord, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with header styling and auto-sized columns.
pub(crate) fn export_xlsx<T: ExportRecord>(rows: &[T], path: &Path, sheet: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).map_err(to_export_error)?;

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = T::headers();
    let kinds = T::kinds();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, record) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in record.to_row().iter().enumerate() {
            let kind = kinds.get(col).copied().unwrap_or(ColumnKind::Text);
            write_cell(worksheet, row, col as u16, value, kind, band_color)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell according to its column kind; values that do not parse
/// for their kind fall back to text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: ColumnKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let typed = match kind {
        ColumnKind::Date => date_serial(s).map(|v| (v, base.clone().set_num_format("yyyy-mm-dd"))),
        ColumnKind::Time => time_serial(s).map(|v| (v, base.clone().set_num_format("hh:mm"))),
        ColumnKind::Number => s
            .trim()
            .parse::<f64>()
            .ok()
            .map(|v| (v, base.clone().set_align(FormatAlign::Right))),
        ColumnKind::Text => None,
    };

    match typed {
        Some((num, fmt)) => worksheet.write_with_format(row, col, num, &fmt),
        None => worksheet.write_with_format(row, col, s, &base),
    }
    .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
