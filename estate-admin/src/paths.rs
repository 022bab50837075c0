//! Platform-specific directory paths.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "estate";
const APPLICATION: &str = "estate-admin";

/// Name of the log file written by the running process.
const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for persistent data (the preferences database).
///
/// - Linux: `$XDG_DATA_HOME/estate-admin` or `~/.local/share/estate-admin`
/// - macOS: `~/Library/Application Support/dev.estate.estate-admin`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory for regenerable data (logs).
///
/// - Linux: `$XDG_CACHE_HOME/estate-admin` or `~/.cache/estate-admin`
/// - macOS: `~/Library/Caches/dev.estate.estate-admin`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the list preferences database.
pub fn prefs_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("prefs.db"))
}

/// Path to the current log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log and prune old archives.
///
/// Call at startup before opening the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache);
}

fn rotate_logs_in(cache: &Path) {
    let latest = cache.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        if let Err(e) = fs::rename(&latest, &archived) {
            eprintln!("could not archive {}: {}", latest.display(), e);
        }
    }
    cleanup_old_logs(cache);
}

/// Keep only the newest `MAX_OLD_LOGS` archived logs.
fn cleanup_old_logs(cache: &Path) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    let excess = logs.len().saturating_sub(MAX_OLD_LOGS);
    for entry in logs.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}
