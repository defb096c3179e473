pub mod app_config;
pub mod config;
pub mod paths;
pub mod signal;
pub mod targets;
pub mod watch;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use signal::{ParseSignalError, Signal};
pub use targets::{generate_targets, MonitoredTarget};
pub use watch::{load_watch_config, ShowConfig, WatchConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read shows file {path}: {source}")]
    ShowsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse shows file: {0}")]
    ShowsFileParse(#[from] serde_yaml::Error),

    #[error("invalid watch configuration: {0}")]
    Validation(String),
}
