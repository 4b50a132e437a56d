//! Extraction pipeline.
//!
//! Document -> {normalized fragments, mapped signals} -> deep merge -> record,
//! run for many addresses at once by [`Scout`].

pub mod batch;
pub mod extract;
pub mod merge;
pub mod normalize;
pub mod unstructured;

pub use batch::{AddressOutcome, Scout};
pub use extract::Extractor;
pub use merge::{merge, merge_all};
pub use normalize::{is_canonical_context, normalize_fragment};
pub use unstructured::map_signals;
