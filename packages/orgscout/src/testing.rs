//! Testing utilities: page builders and fixtures.
//!
//! Useful for testing code built on the scout library without making
//! network calls. Pair with [`MockFetcher`](crate::fetchers::MockFetcher).

use serde_json::json;

pub use crate::fetchers::MockFetcher;

/// Builder for small HTML pages with embedded JSON-LD.
///
/// # Example
///
/// ```rust
/// use orgscout::testing::TestPage;
/// use serde_json::json;
///
/// let html = TestPage::new()
///     .with_json_ld(&json!({"@context": "http://schema.org", "@type": "Organization"}))
///     .with_body("<p>hello@example.com</p>")
///     .build();
/// assert!(html.contains("application/ld+json"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestPage {
    title: Option<String>,
    blocks: Vec<String>,
    body: Vec<String>,
}

impl TestPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Embed a JSON-LD block.
    pub fn with_json_ld(mut self, fragment: &serde_json::Value) -> Self {
        self.blocks.push(fragment.to_string());
        self
    }

    /// Embed a JSON-LD block verbatim (may be malformed).
    pub fn with_raw_json_ld(mut self, block: impl Into<String>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Append HTML to the body.
    pub fn with_body(mut self, html: impl Into<String>) -> Self {
        self.body.push(html.into());
        self
    }

    pub fn build(&self) -> String {
        let title = self
            .title
            .as_ref()
            .map(|t| format!("<title>{}</title>", t))
            .unwrap_or_default();
        let scripts: String = self
            .blocks
            .iter()
            .map(|b| format!(r#"<script type="application/ld+json">{}</script>"#, b))
            .collect();

        format!(
            "<!DOCTYPE html><html><head>{}{}</head><body>{}</body></html>",
            title,
            scripts,
            self.body.join("\n")
        )
    }
}

/// The Organization block served on canddi.com.
pub fn canddi_organization() -> serde_json::Value {
    json!({
        "@context": "http://schema.org",
        "@type": "Organization",
        "name": "CANDDi",
        "legalName": "Campaign and Digital Intelligence Limited",
        "alternateName": "CANDDi",
        "url": "https://www.canddi.com",
        "logo": "https://www.canddi.com/static/img/logo2x.png",
        "foundingDate": "2009",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "47 Newton Street",
            "addressLocality": "Manchester",
            "addressRegion": "Manchester",
            "postalCode": "M1 1FT",
            "addressCountry": "GB"
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer support",
            "telephone": "+44 161 1080",
            "email": "hello@canddi.com"
        },
        "sameAs": [
            "https://www.facebook.com/thisiscanddi",
            "https://www.linkedin.com/company/1079436",
            "https://twitter.com/canddi/"
        ]
    })
}

/// A canddi.com-like landing page: the Organization block plus a footer
/// with contact details and social links.
pub fn canddi_page() -> String {
    TestPage::new()
        .with_title("CANDDi - Smart Visitor Tracking")
        .with_json_ld(&canddi_organization())
        .with_body(
            r#"<header><a href="/">Home</a><a href="/pricing">Pricing</a></header>
               <main><h1>Turn anonymous visitors into customers</h1></main>
               <footer>
                 <p>47 Newton Street, Manchester, M1 1FT</p>
                 <p>Call +44 161 1080 or email <a href="mailto:hello@canddi.com">hello@canddi.com</a></p>
                 <a href="https://twitter.com/canddi/">Twitter</a>
                 <a href="https://www.instagram.com/canddi">Instagram</a>
               </footer>"#,
        )
        .build()
}
