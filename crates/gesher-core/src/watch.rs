use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_CALENDAR_BASE_URL: &str =
    "https://www.gesher-theatre.co.il/he/company/a/calendar/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowConfig {
    pub id: u32,
    pub name: String,
}

/// Which calendar pages to watch: every show × year × month in
/// `month_start..=month_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_calendar_base_url")]
    pub calendar_base_url: String,
    pub shows: Vec<ShowConfig>,
    pub years: Vec<i32>,
    pub month_start: u8,
    pub month_end: u8,
}

fn default_calendar_base_url() -> String {
    DEFAULT_CALENDAR_BASE_URL.to_string()
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            calendar_base_url: default_calendar_base_url(),
            shows: vec![
                ShowConfig {
                    id: 2839,
                    name: "Souls".to_string(),
                },
                ShowConfig {
                    id: 2752,
                    name: "Richard III".to_string(),
                },
            ],
            years: vec![2026],
            month_start: 1,
            month_end: 8,
        }
    }
}

/// Load and validate a watch configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watch_config(path: &Path) -> Result<WatchConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ShowsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: WatchConfig = serde_yaml::from_str(&content)?;
    validate_watch_config(&config)?;

    Ok(config)
}

/// Check the invariants the target enumerator relies on.
///
/// # Errors
///
/// Returns `ConfigError::Validation` describing the first violation found.
pub fn validate_watch_config(config: &WatchConfig) -> Result<(), ConfigError> {
    if config.calendar_base_url.trim().is_empty() {
        return Err(ConfigError::Validation(
            "calendar_base_url must be non-empty".to_string(),
        ));
    }

    if config.shows.is_empty() {
        return Err(ConfigError::Validation(
            "at least one show must be configured".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for show in &config.shows {
        if show.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "show {} has an empty name",
                show.id
            )));
        }
        if !seen_ids.insert(show.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate show id: {}",
                show.id
            )));
        }
    }

    if config.years.is_empty() {
        return Err(ConfigError::Validation(
            "at least one year must be configured".to_string(),
        ));
    }

    if !(1..=12).contains(&config.month_start) || !(1..=12).contains(&config.month_end) {
        return Err(ConfigError::Validation(format!(
            "months must be within 1..=12 (got {}..={})",
            config.month_start, config.month_end
        )));
    }

    if config.month_start > config.month_end {
        return Err(ConfigError::Validation(format!(
            "month_start {} is after month_end {}",
            config.month_start, config.month_end
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "watch_test.rs"]
mod tests;
