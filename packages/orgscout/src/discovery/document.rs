//! Parsed HTML document.
//!
//! Thin wrapper around `scraper::Html` exposing exactly what discovery
//! needs: CSS selection, embedded JSON-LD blocks, visible text and links.

use scraper::{ElementRef, Html, Selector};
use url::Url;

const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// An immutable parsed page.
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parse an HTML document. Parsing never fails; broken markup is repaired.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
            base_url: None,
        }
    }

    /// Set the URL relative links are resolved against.
    ///
    /// An unparseable URL leaves the document without a base.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = Url::parse(url).ok();
        self
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Host of the base URL, without a leading `www.`.
    pub fn host(&self) -> Option<&str> {
        self.base_url
            .as_ref()
            .and_then(|u| u.host_str())
            .map(|h| h.trim_start_matches("www."))
    }

    /// Elements matching a CSS selector; an invalid selector matches nothing.
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Raw contents of every `<script type="application/ld+json">` block.
    pub fn json_ld_blocks(&self) -> Vec<String> {
        self.select(JSON_LD_SELECTOR)
            .into_iter()
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    /// Page title, if any.
    pub fn title(&self) -> Option<String> {
        self.select("title")
            .first()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Visible text: every text node outside scripts, styles and the head,
    /// separated by newlines.
    pub fn text(&self) -> String {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .map(|el| HIDDEN_ELEMENTS.contains(&el.name()))
                        .unwrap_or(false)
                });
                let text = text.trim();
                (!hidden && !text.is_empty()).then(|| text.to_string())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Raw `href` attribute of every anchor.
    pub fn hrefs(&self) -> Vec<String> {
        self.select("a[href]")
            .into_iter()
            .filter_map(|el| el.value().attr("href"))
            .map(|href| href.trim().to_string())
            .collect()
    }

    /// Anchors as absolute http(s) URLs, resolved against the base URL.
    pub fn links(&self) -> Vec<Url> {
        self.hrefs()
            .iter()
            .filter_map(|href| match &self.base_url {
                Some(base) => base.join(href).ok(),
                None => Url::parse(href).ok(),
            })
            .filter(|url| url.scheme() == "http" || url.scheme() == "https")
            .collect()
    }
}
