//! The page-fetching capability the monitor depends on.

use std::future::Future;

/// Retrieves the text of a calendar page.
///
/// Implementations resolve to `Some(body)` on success and `None` when the page
/// is unavailable for any reason (transport failure, non-2xx status,
/// undecodable body). Ordinary fetch failures are never surfaced as errors;
/// the caller records them as a `FETCH_ERROR` signal.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Option<String>>;
}
