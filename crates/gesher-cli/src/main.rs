mod logging;
mod monitor;
mod notify;
mod state;

use std::path::PathBuf;

use clap::Parser;
use gesher_core::WatchConfig;
use gesher_scraper::{CalendarClient, RegexMarkerMatcher};

use crate::notify::AppleScriptNotifier;
use crate::state::StateStore;

#[derive(Debug, Parser)]
#[command(name = "gesher-watch")]
#[command(about = "Monitor the Gesher Theater calendar for schedule changes")]
#[command(
    after_help = "To reset, delete the state directory (macOS: ~/Library/Caches/gesher-watch) and run once with --stdout."
)]
struct Cli {
    /// Write logs to stdout (useful for testing). Default is to log to a file.
    #[arg(long)]
    stdout: bool,

    /// Log file path. Ignored with --stdout.
    #[arg(
        long,
        value_name = "PATH",
        default_value_os_t = gesher_core::paths::log_file()
    )]
    logfile: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = gesher_core::load_app_config()?;
    let _log_guard = logging::init(cli.stdout, &cli.logfile, &config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    let watch = match config.shows_path.as_deref() {
        Some(path) => gesher_core::load_watch_config(path)?,
        None => WatchConfig::default(),
    };
    let targets = gesher_core::generate_targets(&watch);

    let client = CalendarClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build calendar client: {e}"))?;
    let matcher = RegexMarkerMatcher::hebrew();
    let store = StateStore::new(config.state_dir.clone());
    let notifier = AppleScriptNotifier::from_config(&config);

    monitor::run_monitor(&targets, &client, &matcher, &store, &notifier).await?;

    Ok(())
}
