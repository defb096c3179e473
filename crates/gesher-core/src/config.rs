use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::{paths, ConfigError};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a plain
/// `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_flag = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got '{raw}'"),
            }),
            Err(_) => Ok(default),
        }
    };

    let path_or = |var: &str, default: PathBuf| -> PathBuf {
        lookup(var).map_or(default, PathBuf::from)
    };

    let log_level = or_default("GESHER_LOG_LEVEL", "info");
    let state_dir = path_or("GESHER_STATE_DIR", paths::state_dir());
    let shows_path = lookup("GESHER_SHOWS_PATH").ok().map(PathBuf::from);

    let scraper_request_timeout_secs = parse_u64("GESHER_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    if scraper_request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GESHER_SCRAPER_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let scraper_user_agent = or_default(
        "GESHER_SCRAPER_USER_AGENT",
        "gesher-watch/0.1 (calendar-monitor)",
    );

    let notify_enabled = parse_flag("GESHER_NOTIFY_ENABLED", true)?;
    let notify_recipient = or_default("GESHER_NOTIFY_RECIPIENT", "your.email@example.com");
    let notify_helper = path_or("GESHER_NOTIFY_HELPER", PathBuf::from("/usr/bin/osascript"));
    let notify_script = lookup("GESHER_NOTIFY_SCRIPT").ok().map(PathBuf::from);

    Ok(AppConfig {
        log_level,
        state_dir,
        shows_path,
        scraper_request_timeout_secs,
        scraper_user_agent,
        notify_enabled,
        notify_recipient,
        notify_helper,
        notify_script,
    })
}

/// Parse a boolean toggle. Accepts `true/false`, `1/0`, `yes/no`, `on/off`
/// in any case.
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
