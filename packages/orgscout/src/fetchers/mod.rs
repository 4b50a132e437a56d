//! Fetcher implementations.
//!
//! - `HttpFetcher` - one HTTP GET per domain
//! - `MockFetcher` - canned pages for testing

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::PageFetcher;
