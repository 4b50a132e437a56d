//! Vocabulary normalization of embedded JSON-LD fragments.
//!
//! Fragments that already declare the plain schema.org context string are
//! taken as-is. Every other fragment is compacted against schema.org: full
//! term IRIs and prefixed terms become bare terms, value objects and node
//! references collapse to plain values, and the canonical `@context` replaces
//! whatever context the fragment declared.
//!
//! A declared context is accepted when it refers to schema.org somewhere:
//! as a string, as an `@vocab`, or as a prefix definition such as
//! `{"schema": "http://schema.org/"}`. Arrays of contexts are searched
//! entry by entry.

use serde_json::Map;

use crate::error::{FragmentError, FragmentResult};
use crate::types::record::{Record, Value, CONTEXT_KEY, SCHEMA_ORG, TYPE_KEY};

const VOCABULARY_IRIS: &[&str] = &["http://schema.org/", "https://schema.org/"];

/// Normalize one fragment into a canonical record.
pub fn normalize_fragment(fragment: &serde_json::Value) -> FragmentResult<Record> {
    let object = fragment.as_object().ok_or(FragmentError::NotAnObject)?;

    match object.get(CONTEXT_KEY) {
        Some(context) if is_canonical_context(context) => Record::try_from(fragment.clone()),
        Some(context) => {
            let vocabulary = Vocabulary::from_context(context).ok_or_else(|| {
                FragmentError::UnsupportedContext {
                    context: context.to_string(),
                }
            })?;
            compact(object, &vocabulary)
        }
        None => compact(object, &Vocabulary::default()),
    }
}

/// Whether a `@context` value is the schema.org vocabulary string.
pub fn is_canonical_context(context: &serde_json::Value) -> bool {
    context.as_str().is_some_and(is_vocabulary_iri)
}

fn is_vocabulary_iri(iri: &str) -> bool {
    let iri = iri.trim().trim_end_matches('/');
    iri == SCHEMA_ORG || iri == "https://schema.org"
}

/// Prefixes that expand into schema.org terms.
#[derive(Debug, Clone)]
struct Vocabulary {
    prefixes: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            prefixes: VOCABULARY_IRIS.iter().map(|iri| iri.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// Read a declared context. `None` when it never mentions schema.org.
    fn from_context(context: &serde_json::Value) -> Option<Self> {
        let entries: Vec<&serde_json::Value> = match context {
            serde_json::Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };

        let mut vocabulary = Self::default();
        let mut mentions_vocabulary = false;

        for entry in entries {
            match entry {
                serde_json::Value::String(iri) => {
                    mentions_vocabulary |= is_vocabulary_iri(iri);
                }
                serde_json::Value::Object(definitions) => {
                    for (term, definition) in definitions {
                        if !definition.as_str().is_some_and(is_vocabulary_iri) {
                            continue;
                        }
                        mentions_vocabulary = true;
                        // `@vocab` makes bare terms schema.org terms, which they already are
                        if !term.starts_with('@') {
                            vocabulary.prefixes.push(format!("{}:", term));
                        }
                    }
                }
                _ => {}
            }
        }

        mentions_vocabulary.then_some(vocabulary)
    }

    fn strip<'a>(&self, iri: &'a str) -> Option<&'a str> {
        self.prefixes
            .iter()
            .find_map(|prefix| iri.strip_prefix(prefix.as_str()))
            .filter(|term| !term.is_empty())
    }
}

fn compact(
    object: &Map<String, serde_json::Value>,
    vocabulary: &Vocabulary,
) -> FragmentResult<Record> {
    let mut record = Record::canonical();
    for (key, value) in compact_object(object, vocabulary)? {
        record.insert(key, value);
    }
    Ok(record)
}

fn compact_object(
    object: &Map<String, serde_json::Value>,
    vocabulary: &Vocabulary,
) -> FragmentResult<Record> {
    let mut record = Record::new();

    for (key, value) in object {
        // Contexts are resolved above; nested ones carry nothing for the record
        if key == CONTEXT_KEY {
            continue;
        }
        let term = compact_key(key, vocabulary)?;
        let value = if term == TYPE_KEY {
            compact_type(value, vocabulary)?
        } else {
            compact_value(key, value, vocabulary)?
        };
        record.insert(term, value);
    }

    Ok(record)
}

fn compact_key(key: &str, vocabulary: &Vocabulary) -> FragmentResult<String> {
    if key.starts_with('@') {
        return Ok(key.to_string());
    }
    if let Some(term) = vocabulary.strip(key) {
        return Ok(term.to_string());
    }
    if key.contains(':') {
        return Err(FragmentError::UnknownTerm {
            term: key.to_string(),
        });
    }
    Ok(key.to_string())
}

fn compact_type(value: &serde_json::Value, vocabulary: &Vocabulary) -> FragmentResult<Value> {
    match value {
        serde_json::Value::String(iri) => Ok(Value::string(vocabulary.strip(iri).unwrap_or(iri))),
        serde_json::Value::Array(items) => {
            let types = items
                .iter()
                .map(|item| compact_type(item, vocabulary))
                .collect::<FragmentResult<Vec<_>>>()?;
            Ok(collapse(types))
        }
        other => Err(FragmentError::InvalidValue {
            key: TYPE_KEY.to_string(),
            reason: format!("expected a string or array, found {}", other),
        }),
    }
}

fn compact_value(
    key: &str,
    value: &serde_json::Value,
    vocabulary: &Vocabulary,
) -> FragmentResult<Value> {
    match value {
        serde_json::Value::Object(object) => {
            if let Some(inner) = object.get("@value") {
                return Ok(Value::from(inner.clone()));
            }
            if let Some(list) = object.get("@list") {
                let items = list.as_array().ok_or_else(|| FragmentError::InvalidValue {
                    key: key.to_string(),
                    reason: "@list must be an array".to_string(),
                })?;
                let items = items
                    .iter()
                    .map(|item| compact_value(key, item, vocabulary))
                    .collect::<FragmentResult<Vec<_>>>()?;
                return Ok(Value::Sequence(items));
            }
            if object.len() == 1 {
                if let Some(id) = object.get("@id") {
                    let id = id.as_str().ok_or_else(|| FragmentError::InvalidValue {
                        key: key.to_string(),
                        reason: "@id must be a string".to_string(),
                    })?;
                    return Ok(Value::string(id));
                }
            }
            Ok(Value::Record(compact_object(object, vocabulary)?))
        }
        serde_json::Value::Array(items) => {
            let items = items
                .iter()
                .map(|item| compact_value(key, item, vocabulary))
                .collect::<FragmentResult<Vec<_>>>()?;
            Ok(collapse(items))
        }
        scalar => Ok(Value::from(scalar.clone())),
    }
}

/// Compact array form: a single element stands alone.
fn collapse(mut items: Vec<Value>) -> Value {
    if items.len() == 1 {
        items.remove(0)
    } else {
        Value::Sequence(items)
    }
}
