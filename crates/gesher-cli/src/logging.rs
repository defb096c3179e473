use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Installs the global subscriber, writing to stdout or appending to `logfile`.
///
/// `RUST_LOG` takes precedence over `log_level`. The returned guard flushes
/// buffered file output on drop and must be held until the process exits.
pub(crate) fn init(
    to_stdout: bool,
    logfile: &Path,
    log_level: &str,
) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_owned()))
        .with_target(false);

    if to_stdout {
        builder.with_writer(std::io::stdout).init();
        return Ok(None);
    }

    let logfile = expand_home(logfile);
    let (dir, file_name) = split_log_path(&logfile)?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)
        .with_context(|| format!("failed to open log file {}", logfile.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    builder.with_writer(writer).with_ansi(false).init();

    Ok(Some(guard))
}

/// Expands a leading `~` to the current user's home directory.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

/// Splits a log path into its directory (`.` if none) and file name.
fn split_log_path(logfile: &Path) -> anyhow::Result<(PathBuf, String)> {
    let file_name = logfile
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", logfile.display()))?;
    let dir = logfile
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_replaces_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            expand_home(Path::new("~/Library/Logs/watch.log")),
            home.join("Library/Logs/watch.log")
        );
    }

    #[test]
    fn expand_home_leaves_other_paths() {
        assert_eq!(
            expand_home(Path::new("/var/log/watch.log")),
            PathBuf::from("/var/log/watch.log")
        );
        assert_eq!(
            expand_home(Path::new("logs/~watch.log")),
            PathBuf::from("logs/~watch.log")
        );
    }

    #[test]
    fn split_log_path_separates_dir_and_name() {
        let (dir, name) = split_log_path(Path::new("/tmp/logs/gesher.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, "gesher.log");
    }

    #[test]
    fn split_log_path_defaults_to_current_dir() {
        let (dir, name) = split_log_path(Path::new("gesher.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "gesher.log");
    }

    #[test]
    fn split_log_path_rejects_directory_only() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
