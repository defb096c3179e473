//! Delivery of the end-of-run change message.

use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gesher_core::AppConfig;
use tokio::process::Command;

/// The iMessage sender, compiled from `assets/send_imessage.applescript`.
pub(crate) const BUNDLED_SCRIPT: &str = include_str!("../assets/send_imessage.applescript");
const BUNDLED_SCRIPT_NAME: &str = "send_imessage.applescript";

/// Sends one composed message to a fixed recipient.
///
/// Delivery is best-effort: transport failures are logged and swallowed.
/// An `Err` means the notifier is misconfigured and the run must stop.
pub(crate) trait Notifier {
    fn notify(&self, message: &str) -> impl Future<Output = anyhow::Result<()>>;
}

/// Delivers messages by running `<helper> <script> <recipient> <message>`,
/// by default `osascript send_imessage.applescript`.
///
/// Without an explicit script the bundled one is installed into the state
/// directory on first use.
#[derive(Debug, Clone)]
pub(crate) struct AppleScriptNotifier {
    enabled: bool,
    helper: PathBuf,
    script: Option<PathBuf>,
    state_dir: PathBuf,
    recipient: String,
}

impl AppleScriptNotifier {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            enabled: config.notify_enabled,
            helper: config.notify_helper.clone(),
            script: config.notify_script.clone(),
            state_dir: config.state_dir.clone(),
            recipient: config.notify_recipient.clone(),
        }
    }

    /// Path of the script handed to the helper.
    ///
    /// An explicit script must already exist; the bundled script is
    /// (re)written when missing or stale.
    fn resolve_script(&self) -> anyhow::Result<PathBuf> {
        match &self.script {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => anyhow::bail!("missing notification script: {}", path.display()),
            None => install_bundled_script(&self.state_dir),
        }
    }
}

/// Writes the bundled script into `dir` unless an identical copy is there.
pub(crate) fn install_bundled_script(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(BUNDLED_SCRIPT_NAME);
    let current = fs::read_to_string(&path).unwrap_or_default();
    if current == BUNDLED_SCRIPT {
        return Ok(path);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create script directory {}", dir.display()))?;
    fs::write(&path, BUNDLED_SCRIPT)
        .with_context(|| format!("failed to install notification script {}", path.display()))?;
    tracing::debug!(path = %path.display(), "installed bundled notification script");
    Ok(path)
}

impl Notifier for AppleScriptNotifier {
    async fn notify(&self, message: &str) -> anyhow::Result<()> {
        if !self.enabled {
            tracing::info!("notifications disabled; not sending");
            return Ok(());
        }

        let script = self.resolve_script()?;
        let output = Command::new(&self.helper)
            .arg(&script)
            .arg(&self.recipient)
            .arg(message)
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                tracing::debug!("notification sent");
            }
            Ok(output) => {
                tracing::warn!(
                    status = %output.status,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "notification helper reported failure"
                );
            }
            Err(e) => {
                tracing::warn!(
                    helper = %self.helper.display(),
                    error = %e,
                    "failed to launch notification helper"
                );
            }
        }

        Ok(())
    }
}
