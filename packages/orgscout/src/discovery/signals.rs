//! Heuristic signal discovery over page text and links.
//!
//! Finds email addresses, phone numbers, place names and links to other
//! web presences. Results come back grouped by kind (emails, phones,
//! places, links), each kind in page order with exact duplicates dropped.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, warn};
use url::Url;

use super::document::Document;
use super::places::GAZETTEER;
use crate::types::config::ScoutConfig;
use crate::types::signal::Signal;

lazy_static! {
    // Email pattern - RFC 5322 simplified
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b"
    ).unwrap();

    // Phone candidates - optional country code, optional area code in brackets
    static ref PHONE_REGEX: Regex = Regex::new(
        r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{1,5}\)[\s.-]?)?\d[\d\s.-]{5,}\d"
    ).unwrap();

    // Dates and year ranges that look like phone numbers
    static ref NOT_A_PHONE_REGEX: Regex = Regex::new(
        r"^(?:\d{4}[-.]\d{1,2}[-.]\d{1,2}|\d{1,2}[-.]\d{1,2}[-.]\d{4}|\d{4}\s*-\s*\d{4})$"
    ).unwrap();

    // Bare URLs in running text
    static ref URL_REGEX: Regex = Regex::new(r#"https?://[^\s<>"']+"#).unwrap();

    static ref DEFAULT_PLACE_REGEX: Regex = build_place_regex(GAZETTEER.iter().copied())
        .unwrap();
}

const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// Finds unstructured signals in a document.
#[derive(Debug, Clone)]
pub struct SignalFinder {
    place_regex: Regex,
    social_hosts: Vec<String>,
}

impl Default for SignalFinder {
    fn default() -> Self {
        Self::new(&ScoutConfig::default())
    }
}

impl SignalFinder {
    /// Create a finder using the config's social hosts and extra places.
    pub fn new(config: &ScoutConfig) -> Self {
        let place_regex = if config.extra_places.is_empty() {
            DEFAULT_PLACE_REGEX.clone()
        } else {
            let places = GAZETTEER
                .iter()
                .copied()
                .chain(config.extra_places.iter().map(String::as_str));
            build_place_regex(places).unwrap_or_else(|e| {
                warn!(error = %e, "Invalid extra places, using built-in gazetteer");
                DEFAULT_PLACE_REGEX.clone()
            })
        };

        Self {
            place_regex,
            social_hosts: config
                .social_hosts
                .iter()
                .map(|h| h.trim().trim_start_matches("www.").to_lowercase())
                .collect(),
        }
    }

    /// All signals on the page: emails, phones, places, then links.
    pub fn find(&self, doc: &Document) -> Vec<Signal> {
        let text = doc.text();
        let hrefs = doc.hrefs();

        let emails = self.emails(&text, &hrefs);
        let phones = self.phones(&text, &hrefs);
        let places = self.places(&text);
        let links = self.links(doc, &text);

        debug!(
            emails = emails.len(),
            phones = phones.len(),
            places = places.len(),
            links = links.len(),
            "Discovered unstructured signals"
        );

        emails
            .into_iter()
            .map(Signal::Address)
            .chain(phones.into_iter().map(Signal::Phone))
            .chain(places.into_iter().map(Signal::Place))
            .chain(links.into_iter().map(Signal::Link))
            .collect()
    }

    fn emails(&self, text: &str, hrefs: &[String]) -> Vec<String> {
        let from_text = EMAIL_REGEX.find_iter(text).map(|m| m.as_str().to_string());
        let from_links = hrefs.iter().filter_map(|href| {
            let address = strip_scheme(href, "mailto:")?;
            let address = address.split('?').next().unwrap_or("").trim();
            EMAIL_REGEX
                .is_match(address)
                .then(|| address.to_string())
        });

        unique(
            from_text
                .chain(from_links)
                .filter(|email| !is_image_name(email)),
        )
    }

    fn phones(&self, text: &str, hrefs: &[String]) -> Vec<String> {
        let from_text = PHONE_REGEX
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|candidate| is_plausible_phone(candidate));
        let from_links = hrefs.iter().filter_map(|href| {
            let number = strip_scheme(href, "tel:")?.replace("%20", " ");
            let number = number.trim();
            (digit_count(number) >= 7).then(|| number.to_string())
        });

        unique(from_text.chain(from_links))
    }

    fn places(&self, text: &str) -> Vec<String> {
        unique(
            self.place_regex
                .find_iter(text)
                .map(|m| m.as_str().to_string()),
        )
    }

    fn links(&self, doc: &Document, text: &str) -> Vec<String> {
        let page_host = doc.host().map(str::to_lowercase);

        let from_text = URL_REGEX.find_iter(text).filter_map(|m| {
            let raw = m.as_str().trim_end_matches(['.', ',', ';', ':', ')', '!', '?']);
            Url::parse(raw).ok()
        });

        unique(
            doc.links()
                .into_iter()
                .chain(from_text)
                .filter(|url| {
                    let Some(host) = url.host_str() else {
                        return false;
                    };
                    let host = host.trim_start_matches("www.").to_lowercase();
                    if page_host.as_deref() == Some(host.as_str()) {
                        return false;
                    }
                    self.is_social_host(&host)
                })
                .map(|url| url.to_string()),
        )
    }

    fn is_social_host(&self, host: &str) -> bool {
        self.social_hosts.is_empty()
            || self
                .social_hosts
                .iter()
                .any(|h| host == h || host.ends_with(&format!(".{}", h)))
    }
}

fn build_place_regex<'a>(places: impl Iterator<Item = &'a str>) -> Result<Regex, regex::Error> {
    let mut places: Vec<&str> = places.map(str::trim).filter(|p| !p.is_empty()).collect();
    // Longest first so "New York" wins over "York"
    places.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    places.dedup();

    let alternation = places
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation))
}

fn strip_scheme<'a>(href: &'a str, scheme: &str) -> Option<&'a str> {
    let prefix = href.get(..scheme.len())?;
    prefix
        .eq_ignore_ascii_case(scheme)
        .then(|| &href[scheme.len()..])
}

fn is_plausible_phone(candidate: &str) -> bool {
    let digits = digit_count(candidate);
    let separated = candidate.starts_with('+')
        || candidate.contains('(')
        || candidate.contains([' ', '-', '.']);

    (7..=15).contains(&digits) && separated && !NOT_A_PHONE_REGEX.is_match(candidate)
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

fn is_image_name(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// First occurrence of each value, in order.
fn unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(html: &str) -> Vec<Signal> {
        SignalFinder::default().find(&Document::parse(html).with_base_url("https://www.canddi.com/"))
    }

    #[test]
    fn test_finds_emails_in_text_and_mailto() {
        let signals = find(
            r#"<p>Write to hello@canddi.com or <a href="mailto:sales@canddi.com?subject=Hi">sales</a>.
               Also hello@canddi.com again. <img alt="logo@2x.png"></p>"#,
        );

        assert_eq!(
            signals,
            vec![
                Signal::Address("hello@canddi.com".to_string()),
                Signal::Address("sales@canddi.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_finds_phones_and_skips_years() {
        let signals = find(
            r#"<p>Call +44 161 1080 or (0161) 414-1080.</p>
               <p>Serving clients 2009 - 2017. Company no. 06914440.</p>
               <a href="tel:+44%20161%201080">call</a>"#,
        );

        let phones: Vec<_> = signals.iter().map(Signal::value).collect();
        assert_eq!(phones, vec!["+44 161 1080", "(0161) 414-1080"]);
    }

    #[test]
    fn test_finds_places_longest_first() {
        let signals = find("<p>Offices in New York, Madrid and London. Also New York.</p>");

        assert_eq!(
            signals,
            vec![
                Signal::Place("New York".to_string()),
                Signal::Place("Madrid".to_string()),
                Signal::Place("London".to_string()),
            ]
        );
    }

    #[test]
    fn test_extra_places_extend_gazetteer() {
        let config = ScoutConfig::default().with_extra_places(["Stockport"]);
        let signals = SignalFinder::new(&config)
            .find(&Document::parse("<p>Stockport and Manchester</p>"));

        assert_eq!(
            signals,
            vec![
                Signal::Place("Stockport".to_string()),
                Signal::Place("Manchester".to_string()),
            ]
        );
    }

    #[test]
    fn test_links_keep_social_hosts_only() {
        let signals = find(
            r#"<a href="/pricing">Pricing</a>
               <a href="https://www.canddi.com/blog">Blog</a>
               <a href="https://twitter.com/canddi/">Twitter</a>
               <a href="https://uk.linkedin.com/company/1079436">LinkedIn</a>
               <a href="https://example.org/partner">Partner</a>
               <p>Find us at https://www.facebook.com/thisiscanddi.</p>"#,
        );

        assert_eq!(
            signals,
            vec![
                Signal::Link("https://twitter.com/canddi/".to_string()),
                Signal::Link("https://uk.linkedin.com/company/1079436".to_string()),
                Signal::Link("https://www.facebook.com/thisiscanddi".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_social_hosts_keep_all_external_links() {
        let config = ScoutConfig::default().with_social_hosts(Vec::<String>::new());
        let doc = Document::parse(r#"<a href="https://example.org/partner">Partner</a><a href="/about">About</a>"#)
            .with_base_url("https://www.canddi.com/");

        assert_eq!(
            SignalFinder::new(&config).find(&doc),
            vec![Signal::Link("https://example.org/partner".to_string())]
        );
    }

    #[test]
    fn test_signal_order_is_grouped_by_kind() {
        let signals = find(
            r#"<p>London office: +44 161 1080, hello@canddi.com</p>
               <a href="https://twitter.com/canddi">t</a>"#,
        );
        let tags: Vec<_> = signals.iter().map(Signal::tag).collect();
        assert_eq!(tags, vec!["address", "phone", "place", "link"]);
    }

    #[test]
    fn test_empty_page_has_no_signals() {
        assert!(find("<html><body></body></html>").is_empty());
    }
}
