//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the PageFetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::PageFetcher;
use crate::types::page::FetchedPage;

/// Canned response for one domain.
#[derive(Debug, Clone)]
enum MockResponse {
    Page(String),
    Status { code: u16, reason: String },
    Unreachable(String),
}

/// Mock fetcher for testing.
///
/// Serves canned HTML per domain; unknown domains answer 404.
///
/// # Example
///
/// ```rust
/// use orgscout::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_page("canddi.com", "<html><body>hello@canddi.com</body></html>")
///     .with_unreachable("down.example", "connection refused");
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    /// Canned responses indexed by domain
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    /// Domains requested, in call order
    calls: Arc<RwLock<Vec<String>>>,
    /// Artificial latency per fetch
    delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `domain`.
    pub fn add_page(&self, domain: impl Into<String>, html: impl Into<String>) {
        self.insert(domain, MockResponse::Page(html.into()));
    }

    /// Answer `domain` with an HTTP error status.
    pub fn add_status(&self, domain: impl Into<String>, code: u16, reason: impl Into<String>) {
        self.insert(
            domain,
            MockResponse::Status {
                code,
                reason: reason.into(),
            },
        );
    }

    /// Fail `domain` with a transport error.
    pub fn add_unreachable(&self, domain: impl Into<String>, message: impl Into<String>) {
        self.insert(domain, MockResponse::Unreachable(message.into()));
    }

    /// Builder form of [`MockFetcher::add_page`].
    pub fn with_page(self, domain: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(domain, html);
        self
    }

    /// Builder form of [`MockFetcher::add_status`].
    pub fn with_status(self, domain: impl Into<String>, code: u16, reason: impl Into<String>) -> Self {
        self.add_status(domain, code, reason);
        self
    }

    /// Builder form of [`MockFetcher::add_unreachable`].
    pub fn with_unreachable(self, domain: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_unreachable(domain, message);
        self
    }

    /// Sleep this long inside every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of fetches made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the domains that were requested.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Highest number of fetches observed running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn insert(&self, domain: impl Into<String>, response: MockResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.into(), response);
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, domain: &str) -> FetchResult<FetchedPage> {
        self.calls.write().unwrap().push(domain.to_string());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let url = format!("http://{}", domain);
        let response = self.responses.read().unwrap().get(domain).cloned();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match response {
            Some(MockResponse::Page(html)) => Ok(FetchedPage::new(url, html)),
            Some(MockResponse::Status { code, reason }) => {
                Err(FetchError::Status { url, code, reason })
            }
            Some(MockResponse::Unreachable(message)) => Err(FetchError::Http {
                url,
                source: message.into(),
            }),
            None => Err(FetchError::Status {
                url,
                code: 404,
                reason: "Not Found".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
