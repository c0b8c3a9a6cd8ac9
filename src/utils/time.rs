//! Time utilities: normalizing HH:MM values.

use regex::Regex;
use std::sync::LazyLock;

static HH_MM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap());
static HH_MM_SS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap());

/// Collapse a time string to the `HH:MM` form the backend accepts.
///
/// - `HH:MM`    → unchanged
/// - `HH:MM:SS` → seconds dropped
/// - anything else (including `H:MM`) → `None`
pub fn normalize_time(t: &str) -> Option<String> {
    let t = t.trim();
    if HH_MM.is_match(t) {
        Some(t.to_string())
    } else if HH_MM_SS.is_match(t) {
        Some(t[..5].to_string())
    } else {
        None
    }
}

/// Display form for tables: normalized when possible, `--:--` when empty.
pub fn display_time(t: Option<&str>) -> String {
    match t {
        Some(v) if !v.trim().is_empty() => normalize_time(v).unwrap_or_else(|| v.to_string()),
        _ => "--:--".to_string(),
    }
}
