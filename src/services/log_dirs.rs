//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/termfolio/logs/` (typically
//! `~/.local/state/termfolio/logs/`), one file per process so concurrent
//! visitors on a shared host do not interleave. Files left behind by other
//! processes are removed once they are older than a day.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

const APP_DIR: &str = "termfolio";

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Falls back to the system temp directory when the XDG location is
/// unavailable or cannot be created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let fallback = std::env::temp_dir().join("termfolio-logs");
        let dir = xdg_log_dir().unwrap_or_else(|| fallback.clone());

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return fallback;
        }

        dir
    })
}

fn xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join(APP_DIR).join("logs"));
        }
    }

    dirs::home_dir().map(|home| home.join(".local").join("state").join(APP_DIR).join("logs"))
}

/// Path of this process's log file: `{log_dir}/termfolio-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(log_file_name(std::process::id()))
}

fn log_file_name(pid: u32) -> String {
    format!("{}-{}.log", APP_DIR, pid)
}

/// Remove log files written by other processes that are older than a day.
pub fn cleanup_stale_logs() {
    let removed = cleanup_stale_logs_in_dir(log_dir(), std::process::id(), SystemTime::now());
    if removed > 0 {
        tracing::debug!("Removed {} stale log file(s)", removed);
    }
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32, now: SystemTime) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid || !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        if is_file_older_than(&entry.path(), CLEANUP_AGE, now) {
            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e),
            }
        }
    }
    removed
}

fn is_file_older_than(path: &Path, age: Duration, now: SystemTime) -> bool {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| now.duration_since(modified).ok())
        .is_some_and(|elapsed| elapsed > age)
}

/// Extract the PID from a name like `termfolio-12345.log`.
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    let without_ext = name.strip_suffix(".log")?;
    let pid_str = without_ext.strip_prefix(APP_DIR)?.strip_prefix('-')?;
    pid_str.parse().ok()
}
