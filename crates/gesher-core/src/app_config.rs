use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub state_dir: PathBuf,
    pub shows_path: Option<PathBuf>,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub notify_enabled: bool,
    pub notify_recipient: String,
    pub notify_helper: PathBuf,
    /// Explicit delivery script; `None` installs the bundled one.
    pub notify_script: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("state_dir", &self.state_dir)
            .field("shows_path", &self.shows_path)
            .field(
                "scraper_request_timeout_secs",
                &self.scraper_request_timeout_secs,
            )
            .field("scraper_user_agent", &self.scraper_user_agent)
            .field("notify_enabled", &self.notify_enabled)
            .field("notify_recipient", &"[redacted]")
            .field("notify_helper", &self.notify_helper)
            .field("notify_script", &self.notify_script)
            .finish()
    }
}
