use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::fetch::PageFetcher;

/// HTTP client for the theater's public calendar pages.
///
/// Redirects are followed; any non-2xx final status is treated as a failure.
/// No retries are attempted: a failed page is simply reported as unavailable
/// and picked up again on the next scheduled run.
pub struct CalendarClient {
    client: Client,
}

impl CalendarClient {
    /// Creates a `CalendarClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one calendar page and returns its body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx final status.
    /// - [`ScraperError::Http`] on network, TLS, timeout, or body decode failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

impl PageFetcher for CalendarClient {
    async fn fetch(&self, url: &str) -> Option<String> {
        match self.fetch_page(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(host = %extract_host(url), error = %e, "calendar fetch failed");
                None
            }
        }
    }
}

/// Extracts the hostname from a URL for log fields.
///
/// Falls back to the full URL string if parsing fails.
fn extract_host(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
