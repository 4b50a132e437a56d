//! Organisation Metadata Scout
//!
//! Given email addresses, loads the landing page of each address's domain
//! and extracts what the page says about the organisation behind it: name,
//! postal address, contact points, social profiles and so on.
//!
//! Two independent sources feed every result:
//!
//! - **Structured** - embedded JSON-LD blocks, normalized into the
//!   schema.org vocabulary
//! - **Unstructured** - emails, phone numbers, place names and social links
//!   found heuristically in the page text
//!
//! Both are deep-merged into a single de-duplicated schema.org record.
//!
//! # Usage
//!
//! ```rust,ignore
//! use orgscout::{render, HttpFetcher, Scout, ScoutConfig};
//!
//! let config = ScoutConfig::default().with_concurrency(8);
//! let scout = Scout::new(HttpFetcher::new(&config)?, config);
//!
//! let outcomes = scout.run(&["tim@canddi.com".to_string()]).await;
//! println!("{}", render::human_readable(&outcomes));
//! ```
//!
//! # Modules
//!
//! - [`types`] - record model, signals, pages and configuration
//! - [`pipeline`] - normalizer, signal mapper, merge engine, extractor, batch runner
//! - [`discovery`] - HTML document, JSON-LD fragments, heuristic signals
//! - [`traits`] - the `PageFetcher` abstraction
//! - [`fetchers`] - `HttpFetcher` and `MockFetcher`
//! - [`domain`] - email to domain resolution
//! - [`render`] - human-readable and JSON-LD output
//! - [`testing`] - page builders and fixtures

pub mod discovery;
pub mod domain;
pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod render;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use discovery::{find_fragments, Document, SignalFinder};
pub use error::{FetchError, FragmentError, ScoutError};
pub use fetchers::{HttpFetcher, MockFetcher};
pub use pipeline::{
    map_signals, merge, merge_all, normalize_fragment, AddressOutcome, Extractor, Scout,
};
pub use traits::PageFetcher;
pub use types::{
    config::ScoutConfig,
    page::FetchedPage,
    record::{Record, Scalar, Value, CONTEXT_KEY, SCHEMA_ORG, TYPE_KEY},
    signal::Signal,
};
