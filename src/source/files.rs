//! Discovery of log files inside a directory.

use crate::error::{LogscopeError, Result};
use glob::{glob, Pattern};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// List the regular files in `dir` matching the glob `pattern`
///
/// The result is sorted so two scans of an unchanged directory visit files in
/// the same order. Directories and other non-regular entries are dropped, as
/// are paths that cannot be read while globbing. A missing directory yields an
/// empty list.
///
/// # Errors
///
/// Returns `LogscopeError::InvalidPattern` if `pattern` is not a valid glob.
pub fn list_log_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    // Validate the caller's pattern alone so a bracket in `dir` cannot be blamed on it
    Pattern::new(pattern).map_err(|source| LogscopeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    if !dir.is_dir() {
        warn!("log directory {} is missing or not a directory", dir.display());
        return Ok(Vec::new());
    }

    let full = resolve_glob(dir, pattern);
    let mut paths: Vec<PathBuf> = glob(&full)
        .map_err(|source| LogscopeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("skipping unreadable path while listing logs: {e}");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    debug!("found {} log file(s) in {} matching {pattern:?}", paths.len(), dir.display());
    Ok(paths)
}

/// Join `pattern` onto `dir`, escaping any glob metacharacters in `dir` itself
fn resolve_glob(dir: &Path, pattern: &str) -> String {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    Path::new(&escaped).join(pattern).to_string_lossy().into_owned()
}
