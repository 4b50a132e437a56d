//! Unstructured signal types.
//!
//! A signal is one data point found by heuristic scanning of page text:
//! an email address, a phone number, a place name or a link.

use serde::{Deserialize, Serialize};

/// One heuristically detected data point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// An email address
    Address(String),
    /// A phone number, as written on the page
    Phone(String),
    /// A place name (country, city, region)
    Place(String),
    /// A link to another web presence
    Link(String),
    /// A tagged value of a kind the mapper does not know about
    #[serde(skip)]
    Unknown { tag: String, value: String },
}

impl Signal {
    /// Build a signal from a `{tag: value}` pair.
    ///
    /// Tags outside the four known kinds produce [`Signal::Unknown`].
    pub fn from_tagged(tag: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match tag {
            "address" | "email" => Signal::Address(value),
            "phone" => Signal::Phone(value),
            "place" => Signal::Place(value),
            "link" => Signal::Link(value),
            other => Signal::Unknown {
                tag: other.to_string(),
                value,
            },
        }
    }

    /// The tag this signal was produced under.
    pub fn tag(&self) -> &str {
        match self {
            Signal::Address(_) => "address",
            Signal::Phone(_) => "phone",
            Signal::Place(_) => "place",
            Signal::Link(_) => "link",
            Signal::Unknown { tag, .. } => tag,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Signal::Address(v) | Signal::Phone(v) | Signal::Place(v) | Signal::Link(v) => v,
            Signal::Unknown { value, .. } => value,
        }
    }
}
