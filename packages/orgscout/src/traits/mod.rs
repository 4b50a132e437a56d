//! Core trait abstractions for the scout library.

pub mod fetcher;

pub use fetcher::PageFetcher;
