//! Fetched page type.

use serde::{Deserialize, Serialize};

/// A landing page as returned by a fetcher, before parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Raw HTML body
    pub html: String,
}

impl FetchedPage {
    /// Create a page that was served directly from `url` with status 200.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            status: 200,
            html: html.into(),
        }
    }

    /// Set the URL reached after redirects.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = final_url.into();
        self
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Whether the request ended somewhere other than where it started.
    pub fn was_redirected(&self) -> bool {
        self.url != self.final_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_builder() {
        let page = FetchedPage::new("http://canddi.com", "<html></html>")
            .with_final_url("https://www.canddi.com/")
            .with_status(203);

        assert_eq!(page.url, "http://canddi.com");
        assert_eq!(page.final_url, "https://www.canddi.com/");
        assert_eq!(page.status, 203);
        assert!(page.was_redirected());
    }

    #[test]
    fn test_direct_page_is_not_redirected() {
        let page = FetchedPage::new("http://a.example", "<p>hi</p>");
        assert_eq!(page.status, 200);
        assert!(!page.was_redirected());
    }
}
