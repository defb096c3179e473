//! Per-user default locations for state and logs.
//!
//! Uses the [`dirs`] crate for platform-appropriate directory resolution.
//!
//! | Purpose | macOS | Linux |
//! |---------|-------|-------|
//! | State | `~/Library/Caches/gesher-watch/` | `~/.cache/gesher-watch/` |
//! | Log file | `~/Library/Logs/gesher_theater_watch.log` | `~/.local/share/gesher-watch/logs/gesher_theater_watch.log` |
//!
//! `GESHER_STATE_DIR` (see [`crate::config`]) and `--logfile` override these.

use std::path::PathBuf;

const APP_DIR: &str = "gesher-watch";
const LOG_FILE_NAME: &str = "gesher_theater_watch.log";

/// Default directory holding one state record per monitored target.
#[must_use]
pub fn state_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR))
}

/// Default log file used when `--stdout` is not given.
#[must_use]
pub fn log_file() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

#[cfg(target_os = "macos")]
fn log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join("Library").join("Logs"))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR))
}

#[cfg(not(target_os = "macos"))]
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR))
}
