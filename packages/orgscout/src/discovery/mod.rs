//! Discovery of raw data in a fetched page.
//!
//! - [`document`] - parsed HTML with selection, text and link helpers
//! - [`fragments`] - embedded JSON-LD fragments
//! - [`signals`] - heuristic emails, phones, places and links

pub mod document;
pub mod fragments;
pub mod places;
pub mod signals;

pub use document::Document;
pub use fragments::find_fragments;
pub use signals::SignalFinder;
