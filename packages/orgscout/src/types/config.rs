//! Configuration types for fetching and extraction.

use serde::{Deserialize, Serialize};

/// Hosts whose links are reported as `sameAs` by default.
pub const DEFAULT_SOCIAL_HOSTS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "x.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "github.com",
    "pinterest.com",
    "tiktok.com",
    "vimeo.com",
];

/// Configuration for a scouting run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Maximum number of addresses processed at once.
    ///
    /// Default: 4.
    pub concurrency: usize,

    /// Transport timeout for one page fetch, in seconds.
    ///
    /// Default: 30.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Scheme used to build the landing page URL from a domain.
    ///
    /// Default: "http".
    pub scheme: String,

    /// Hosts (and their subdomains) whose links count as `sameAs` signals.
    ///
    /// Empty = every absolute link to another host counts.
    #[serde(default)]
    pub social_hosts: Vec<String>,

    /// Extra place names recognised in page text, on top of the built-in gazetteer.
    #[serde(default)]
    pub extra_places: Vec<String>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            timeout_secs: 30,
            user_agent: format!("orgscout/{}", env!("CARGO_PKG_VERSION")),
            scheme: "http".to_string(),
            social_hosts: DEFAULT_SOCIAL_HOSTS.iter().map(|h| h.to_string()).collect(),
            extra_places: Vec::new(),
        }
    }
}

impl ScoutConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the concurrency limit (at least 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Set the fetch timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the URL scheme used for landing pages.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Replace the social host allow-list.
    pub fn with_social_hosts(mut self, hosts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.social_hosts = hosts.into_iter().map(|h| h.into()).collect();
        self
    }

    /// Add extra gazetteer entries.
    pub fn with_extra_places(
        mut self,
        places: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.extra_places = places.into_iter().map(|p| p.into()).collect();
        self
    }
}
