//! Per-document extraction.
//!
//! Runs the structured and unstructured phases over one parsed document
//! and merges their partial records. Both phases only read the document;
//! the merge needs both results.

use tracing::{debug, warn};

use super::merge::{merge, merge_all};
use super::normalize::normalize_fragment;
use super::unstructured::map_signals;
use crate::discovery::{find_fragments, Document, SignalFinder};
use crate::error::FragmentResult;
use crate::types::config::ScoutConfig;
use crate::types::record::Record;

/// Extracts one canonical record per document.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    finder: SignalFinder,
}

impl Extractor {
    pub fn new(config: &ScoutConfig) -> Self {
        Self {
            finder: SignalFinder::new(config),
        }
    }

    /// Merge of every normalized JSON-LD fragment.
    ///
    /// `Ok(None)` when the page embeds no fragments; any malformed block or
    /// unnormalizable fragment is an error.
    pub fn structured(&self, doc: &Document) -> FragmentResult<Option<Record>> {
        let records = find_fragments(doc)?
            .iter()
            .map(normalize_fragment)
            .collect::<FragmentResult<Vec<_>>>()?;

        Ok(merge_all(records))
    }

    /// Record built from heuristic signals. Always has at least `@context`.
    pub fn unstructured(&self, doc: &Document) -> Record {
        map_signals(&self.finder.find(doc))
    }

    /// Full extraction: structured merged with unstructured.
    ///
    /// A structured-phase error drops that partial; the unstructured record
    /// alone is returned.
    pub fn extract(&self, doc: &Document) -> Record {
        let structured = self.structured(doc).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable structured data");
            None
        });
        let unstructured = self.unstructured(doc);

        match structured {
            Some(structured) => {
                debug!(
                    structured_fields = structured.len(),
                    unstructured_fields = unstructured.len(),
                    "Merging structured and unstructured records"
                );
                merge(&structured, &unstructured)
            }
            None => unstructured,
        }
    }

    /// Parse and extract in one step.
    pub fn extract_html(&self, html: &str, base_url: Option<&str>) -> Record {
        let doc = Document::parse(html);
        let doc = match base_url {
            Some(url) => doc.with_base_url(url),
            None => doc,
        };
        self.extract(&doc)
    }
}
