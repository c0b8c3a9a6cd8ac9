//! Date utilities: `YYYY-MM-DD` parsing and period ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date, `today` included.
pub fn resolve_date(s: &str) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Parse a period into inclusive bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - the same forms as `start:end` ranges (both sides in the same format)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{r}: start and end must have same format"
            )));
        }

        let (d1, _) = period_bounds(start)?;
        let (_, d2) = period_bounds(end)?;

        if d2 < d1 {
            return Err(AppError::InvalidDate(format!("{r}: end before start")));
        }
        Ok((d1, d2))
    } else {
        period_bounds(r.trim())
    }
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    if !p.is_ascii() {
        return Err(invalid());
    }

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            if p.as_bytes()[4] != b'-' {
                return Err(invalid());
            }
            let y: i32 = p[0..4].parse().map_err(|_| invalid())?;
            let m: u32 = p[5..7].parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = month_end(d1).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_end(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = match first.month() {
        12 => (first.year() + 1, 1),
        m => (first.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
