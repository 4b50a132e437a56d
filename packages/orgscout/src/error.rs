//! Typed errors for the scout library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while processing one address.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// The landing page could not be loaded
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The worker processing the address panicked or was aborted
    #[error("task failed: {0}")]
    Task(String),

    /// The HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors that can occur while loading a page.
///
/// The display form matches the message shown to users for a failed address.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The domain does not form a valid URL
    #[error("Encountered a problem loading {url}: invalid URL")]
    InvalidUrl { url: String },

    /// Transport-level failure (DNS, connection refused, TLS, ...)
    #[error("Encountered a problem loading {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Server answered with a non-success status
    #[error("Encountered a problem loading {url}: {code}: {reason}")]
    Status {
        url: String,
        code: u16,
        reason: String,
    },

    /// Transport timeout elapsed
    #[error("Encountered a problem loading {url}: request timed out")]
    Timeout { url: String },

    /// Response body could not be read as text
    #[error("Encountered a problem loading {url}: unreadable body: {source}")]
    Body {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Errors raised while reading or normalizing an embedded metadata fragment.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// Script block is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fragment is not a JSON object
    #[error("fragment is not a JSON object")]
    NotAnObject,

    /// Fragment declares a context other than the canonical vocabulary
    #[error("unsupported @context: {context}")]
    UnsupportedContext { context: String },

    /// Fragment references a term outside the canonical vocabulary
    #[error("unknown term: {term}")]
    UnknownTerm { term: String },

    /// A keyword carries a value of the wrong shape
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Result type alias for scout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for fragment operations.
pub type FragmentResult<T> = std::result::Result<T, FragmentError>;
