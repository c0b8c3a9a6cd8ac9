//! Path utilities: expand ~ and resolve output files.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Resolve an output file: `~` is expanded, and a bare relative name lands in
/// `default_dir` when one is configured.
pub fn resolve_output(file: &str, default_dir: Option<&str>) -> PathBuf {
    let p = expand_tilde(file);
    if p.is_absolute() {
        return p;
    }
    match default_dir {
        Some(dir) if !dir.trim().is_empty() => expand_tilde(dir).join(p),
        _ => p,
    }
}
