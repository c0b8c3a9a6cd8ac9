// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Excel serial day number of a `YYYY-MM-DD` date.
pub(crate) fn date_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}

/// Fraction of a day for `HH:MM` / `HH:MM:SS`.
pub(crate) fn time_serial(s: &str) -> Option<f64> {
    let s = s.trim();
    let t = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()?;
    Some(t.num_seconds_from_midnight() as f64 / 86400.0)
}
