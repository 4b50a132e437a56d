//! Page fetcher trait.
//!
//! A fetcher loads the landing page of a domain. The batch runner only
//! depends on this trait, so tests plug in [`MockFetcher`](crate::fetchers::MockFetcher)
//! and production uses [`HttpFetcher`](crate::fetchers::HttpFetcher).

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::page::FetchedPage;

/// Loads the landing page behind a domain.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page for `domain`.
    ///
    /// Transport failures and non-success statuses are errors carrying a
    /// descriptive message; they never panic.
    async fn fetch(&self, domain: &str) -> FetchResult<FetchedPage>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
