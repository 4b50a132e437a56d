//! Batch processing of email addresses.
//!
//! Every address is resolved, fetched and extracted in its own task. A
//! semaphore bounds how many run at once, and results come back in input
//! order. One address failing never affects the others.

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::extract::Extractor;
use crate::discovery::Document;
use crate::domain;
use crate::error::{Result, ScoutError};
use crate::traits::fetcher::PageFetcher;
use crate::types::config::ScoutConfig;
use crate::types::record::Record;

/// The result of processing one address.
#[derive(Debug)]
pub struct AddressOutcome {
    /// Address as given
    pub address: String,
    /// Domain the address resolved to
    pub domain: String,
    /// Merged record, or why none could be produced
    pub result: Result<Record>,
}

impl AddressOutcome {
    fn failed(address: String, error: ScoutError) -> Self {
        let domain = domain::from_email(&address);
        Self {
            address,
            domain,
            result: Err(error),
        }
    }

    /// The record, if one was extracted.
    pub fn record(&self) -> Option<&Record> {
        self.result.as_ref().ok()
    }

    /// Whether a record with anything beyond `@context` was extracted.
    pub fn has_data(&self) -> bool {
        self.record().is_some_and(Record::has_data)
    }
}

/// Runs fetch + extraction for a list of addresses.
///
/// # Example
///
/// ```rust,ignore
/// use orgscout::{HttpFetcher, Scout, ScoutConfig};
///
/// let config = ScoutConfig::default();
/// let scout = Scout::new(HttpFetcher::new(&config)?, config);
/// let outcomes = scout.run(&["tim@canddi.com".to_string()]).await;
/// ```
#[derive(Clone)]
pub struct Scout {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<Extractor>,
    config: ScoutConfig,
}

impl Scout {
    pub fn new(fetcher: impl PageFetcher + 'static, config: ScoutConfig) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(Extractor::new(&config)),
            config,
        }
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Process a single address.
    pub async fn process(&self, address: &str) -> AddressOutcome {
        process_address(self.fetcher.as_ref(), &self.extractor, address.to_string()).await
    }

    /// Process every address with bounded concurrency.
    ///
    /// The output has one outcome per input address, in the same order.
    pub async fn run(&self, addresses: &[String]) -> Vec<AddressOutcome> {
        let concurrency = self.config.concurrency.max(1);
        info!(
            addresses = addresses.len(),
            concurrency = concurrency,
            fetcher = self.fetcher.name(),
            "Starting scout run"
        );

        let semaphore = Arc::new(Semaphore::new(concurrency));

        let handles: Vec<_> = addresses
            .iter()
            .cloned()
            .map(|address| {
                let semaphore = Arc::clone(&semaphore);
                let fetcher = Arc::clone(&self.fetcher);
                let extractor = Arc::clone(&self.extractor);

                tokio::spawn(async move {
                    // The semaphore is never closed
                    let _permit = semaphore.acquire_owned().await.ok();
                    process_address(fetcher.as_ref(), &extractor, address).await
                })
            })
            .collect();

        let outcomes: Vec<AddressOutcome> = join_all(handles)
            .await
            .into_iter()
            .zip(addresses)
            .map(|(joined, address)| {
                joined.unwrap_or_else(|e| {
                    warn!(address = %address, error = %e, "Scout task failed");
                    AddressOutcome::failed(address.clone(), ScoutError::Task(e.to_string()))
                })
            })
            .collect();

        info!(
            addresses = outcomes.len(),
            with_data = outcomes.iter().filter(|o| o.has_data()).count(),
            failed = outcomes.iter().filter(|o| o.result.is_err()).count(),
            "Scout run completed"
        );

        outcomes
    }
}

async fn process_address(
    fetcher: &dyn PageFetcher,
    extractor: &Extractor,
    address: String,
) -> AddressOutcome {
    let domain = domain::from_email(&address);
    debug!(address = %address, domain = %domain, "Processing address");

    let result = match fetcher.fetch(&domain).await {
        Ok(page) => {
            debug!(
                domain = %domain,
                status = page.status,
                redirected = page.was_redirected(),
                final_url = %page.final_url,
                "Landing page loaded"
            );
            let document = Document::parse(&page.html).with_base_url(&page.final_url);
            Ok(extractor.extract(&document))
        }
        Err(e) => {
            warn!(domain = %domain, error = %e, "Fetch failed");
            Err(ScoutError::Fetch(e))
        }
    };

    AddressOutcome {
        address,
        domain,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::MockFetcher;
    use crate::types::record::Value;
    use std::time::Duration;

    #[tokio::test]
    async fn test_process_resolves_domain_and_extracts() {
        let fetcher = MockFetcher::new().with_page(
            "canddi.com",
            "<html><body><p>hello@canddi.com</p></body></html>",
        );
        let scout = Scout::new(fetcher.clone(), ScoutConfig::default());

        let outcome = scout.process("tim@canddi.com").await;

        assert_eq!(outcome.domain, "canddi.com");
        assert_eq!(
            outcome.record().and_then(|r| r.get("email")),
            Some(&Value::Sequence(vec!["hello@canddi.com".into()]))
        );
        assert_eq!(fetcher.calls(), vec!["canddi.com"]);
    }

    #[tokio::test]
    async fn test_run_keeps_order_and_isolates_failures() {
        let fetcher = MockFetcher::new()
            .with_page("a.example", "<p>a@a.example</p>")
            .with_unreachable("b.example", "connection refused")
            .with_page("c.example", "<p>c@c.example</p>");
        let scout = Scout::new(fetcher, ScoutConfig::default());

        let addresses: Vec<String> = ["x@a.example", "x@b.example", "x@c.example"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let outcomes = scout.run(&addresses).await;

        let domains: Vec<_> = outcomes.iter().map(|o| o.domain.as_str()).collect();
        assert_eq!(domains, vec!["a.example", "b.example", "c.example"]);
        assert!(outcomes[0].has_data());
        assert!(matches!(outcomes[1].result, Err(ScoutError::Fetch(_))));
        assert!(outcomes[2].has_data());
    }

    #[tokio::test]
    async fn test_run_respects_concurrency_limit() {
        let fetcher = MockFetcher::new().with_delay(Duration::from_millis(20));
        let scout = Scout::new(fetcher.clone(), ScoutConfig::default().with_concurrency(2));

        let addresses: Vec<String> = (0..6).map(|i| format!("x@d{}.example", i)).collect();
        let outcomes = scout.run(&addresses).await;

        assert_eq!(outcomes.len(), 6);
        assert_eq!(fetcher.call_count(), 6);
        assert!(fetcher.max_in_flight() <= 2);
    }

    #[tokio::test]
    async fn test_run_with_no_addresses() {
        let scout = Scout::new(MockFetcher::new(), ScoutConfig::default());
        assert!(scout.run(&[]).await.is_empty());
    }
}
