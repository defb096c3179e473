//! Flat-file state store: one record per monitored URL.
//!
//! Each record lives at `<dir>/<sha256-hex(url)>.available_count` and holds the
//! last observed signal as plain text (`"12"` or `"FETCH_ERROR"`). Records are
//! never deleted here; removing the directory resets all targets.
//!
//! A record that is not valid UTF-8 or does not hold a signal is logged at
//! `warn` and read as never seen, so the next write silently replaces it
//! without a notification.
//!
//! There is no locking. Runs are expected to be scheduled one at a time.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gesher_core::Signal;
use sha2::{Digest, Sha256};

const RECORD_EXTENSION: &str = "available_count";

pub(crate) struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stable record key for `url`: lower-case hex SHA-256 of its UTF-8 bytes.
    pub(crate) fn key_for(url: &str) -> String {
        format!("{:x}", Sha256::digest(url.as_bytes()))
    }

    pub(crate) fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.{RECORD_EXTENSION}", Self::key_for(url)))
    }

    pub(crate) fn ensure_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create state directory {}", self.dir.display()))
    }

    /// Last recorded signal for `url`, or `None` if the target was never seen.
    ///
    /// Empty records and records that do not hold a valid signal are treated
    /// as never seen.
    pub(crate) fn read(&self, url: &str) -> anyhow::Result<Option<Signal>> {
        let path = self.path_for(url);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(path = %path.display(), "ignoring non-UTF-8 state record");
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read state record {}", path.display()));
            }
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        match trimmed.parse::<Signal>() {
            Ok(signal) => Ok(Some(signal)),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable state record"
                );
                Ok(None)
            }
        }
    }

    /// Overwrites the record for `url`, creating the state directory if needed.
    pub(crate) fn write(&self, url: &str, signal: Signal) -> anyhow::Result<()> {
        self.ensure_dir()?;
        let path = self.path_for(url);
        fs::write(&path, signal.to_string())
            .with_context(|| format!("failed to write state record {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str =
        "https://www.gesher-theatre.co.il/he/company/a/calendar/?Month=1&Year=2026&ShowID=2839";

    fn store() -> (tempfile::TempDir, StateStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = StateStore::new(dir.path().join("gesher-watch"));
        (dir, store)
    }

    #[test]
    fn key_is_sha256_hex() {
        assert_eq!(
            StateStore::key_for("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn key_is_stable_and_distinct_per_url() {
        let first = StateStore::key_for(URL);
        assert_eq!(first, StateStore::key_for(URL));
        assert_eq!(first.len(), 64);
        let other = URL.replace("Month=1", "Month=2");
        assert_ne!(first, StateStore::key_for(&other));
    }

    #[test]
    fn record_file_name_uses_key_and_extension() {
        let (_dir, store) = store();
        let path = store.path_for(URL);
        assert_eq!(path.parent(), Some(store.dir()));
        let expected = format!("{}.available_count", StateStore::key_for(URL));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(expected.as_str())
        );
    }

    #[test]
    fn read_missing_record_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.read(URL).unwrap(), None);
    }

    #[test]
    fn write_creates_directory_and_round_trips() {
        let (_dir, store) = store();
        assert!(!store.dir().exists());

        store.write(URL, Signal::Count(12)).unwrap();
        assert!(store.dir().is_dir());
        assert_eq!(store.read(URL).unwrap(), Some(Signal::Count(12)));
        assert_eq!(fs::read_to_string(store.path_for(URL)).unwrap(), "12");
    }

    #[test]
    fn write_overwrites_previous_value() {
        let (_dir, store) = store();
        store.write(URL, Signal::Count(12)).unwrap();
        store.write(URL, Signal::FetchError).unwrap();
        assert_eq!(store.read(URL).unwrap(), Some(Signal::FetchError));
        assert_eq!(
            fs::read_to_string(store.path_for(URL)).unwrap(),
            "FETCH_ERROR"
        );
    }

    #[test]
    fn read_tolerates_trailing_newline() {
        let (_dir, store) = store();
        store.ensure_dir().unwrap();
        fs::write(store.path_for(URL), "7\n").unwrap();
        assert_eq!(store.read(URL).unwrap(), Some(Signal::Count(7)));
    }

    #[test]
    fn empty_record_reads_as_none() {
        let (_dir, store) = store();
        store.ensure_dir().unwrap();
        fs::write(store.path_for(URL), "  \n").unwrap();
        assert_eq!(store.read(URL).unwrap(), None);
    }

    #[test]
    fn garbage_record_reads_as_none() {
        let (_dir, store) = store();
        store.ensure_dir().unwrap();
        fs::write(store.path_for(URL), "twelve").unwrap();
        assert_eq!(store.read(URL).unwrap(), None);
    }

    #[test]
    fn records_are_independent_per_url() {
        let (_dir, store) = store();
        let other = URL.replace("ShowID=2839", "ShowID=2752");
        store.write(URL, Signal::Count(3)).unwrap();
        store.write(&other, Signal::Count(5)).unwrap();
        assert_eq!(store.read(URL).unwrap(), Some(Signal::Count(3)));
        assert_eq!(store.read(&other).unwrap(), Some(Signal::Count(5)));
    }
}
