//! HTTP-based fetcher implementation.
//!
//! One GET per domain, following redirects; no crawling.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult, ScoutError};
use crate::traits::fetcher::PageFetcher;
use crate::types::config::ScoutConfig;
use crate::types::page::FetchedPage;

/// Maximum redirects followed before giving up
const MAX_REDIRECTS: usize = 5;

/// Fetcher that loads `<scheme>://<domain>` over HTTP.
///
/// # Example
///
/// ```rust,ignore
/// use orgscout::{HttpFetcher, PageFetcher, ScoutConfig};
///
/// let fetcher = HttpFetcher::new(&ScoutConfig::default())?;
/// let page = fetcher.fetch("canddi.com").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    scheme: String,
}

impl HttpFetcher {
    /// Create a fetcher with the config's timeout, user agent and scheme.
    pub fn new(config: &ScoutConfig) -> Result<Self, ScoutError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(ScoutError::Client)?;

        Ok(Self {
            client,
            scheme: config.scheme.clone(),
        })
    }

    fn landing_url(&self, domain: &str) -> FetchResult<Url> {
        let url = format!("{}://{}", self.scheme, domain);
        match Url::parse(&url) {
            Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(parsed),
            _ => Err(FetchError::InvalidUrl { url }),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, domain: &str) -> FetchResult<FetchedPage> {
        let url = self.landing_url(domain)?;
        let requested = url.to_string();
        debug!(url = %requested, "HTTP fetch starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %requested, error = %e, "HTTP request failed");
            if e.is_timeout() {
                FetchError::Timeout {
                    url: requested.clone(),
                }
            } else {
                FetchError::Http {
                    url: requested.clone(),
                    source: Box::new(e),
                }
            }
        })?;

        // Capture final URL after redirects
        let final_url = response.url().to_string();
        let status = response.status();

        if !status.is_success() {
            warn!(url = %final_url, status = %status, "HTTP error status");
            return Err(FetchError::Status {
                url: final_url,
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: final_url.clone(),
                }
            } else {
                FetchError::Body {
                    url: final_url.clone(),
                    source: Box::new(e),
                }
            }
        })?;

        debug!(url = %final_url, content_length = html.len(), "Page fetched successfully");

        Ok(FetchedPage::new(requested, html)
            .with_final_url(final_url)
            .with_status(status.as_u16()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
