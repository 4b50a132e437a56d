//! Canonical record model.
//!
//! A record is an insertion-ordered tree of schema.org fields. Values are a
//! closed sum type so that the merge engine can pattern match on shape
//! instead of inspecting JSON at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FragmentError;

/// The vocabulary namespace every canonical record is expressed in.
pub const SCHEMA_ORG: &str = "http://schema.org";

/// Reserved field naming the vocabulary namespace.
pub const CONTEXT_KEY: &str = "@context";

/// Reserved field naming the entity kind.
pub const TYPE_KEY: &str = "@type";

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// A field value: a scalar, an ordered sequence, or a nested record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Shorthand for a string scalar.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::String(s.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => Value::Scalar(Scalar::Number(n)),
            serde_json::Value::String(s) => Value::Scalar(Scalar::String(s)),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Record(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(Scalar::Null) => serde_json::Value::Null,
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(b),
            Value::Scalar(Scalar::Number(n)) => serde_json::Value::Number(n),
            Value::Scalar(Scalar::String(s)) => serde_json::Value::String(s),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Record(record) => record.into(),
        }
    }
}

/// A schema.org record.
///
/// Field order is the order fields were first inserted; equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// An empty record with no fields at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record holding only the canonical `@context`.
    pub fn canonical() -> Self {
        let mut record = Self::new();
        record.insert(CONTEXT_KEY, SCHEMA_ORG);
        record
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Insert a field, replacing (in place) any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Builder form of [`Record::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Append to a sequence field, creating it if absent.
    ///
    /// A scalar or record already stored under `key` becomes the first element.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        let slot = self
            .fields
            .entry(key.into())
            .or_insert_with(|| Value::Sequence(Vec::new()));

        match slot {
            Value::Sequence(items) => items.push(value),
            other => {
                let previous = std::mem::replace(other, Value::Sequence(Vec::new()));
                *other = Value::Sequence(vec![previous, value]);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `@context` string, if present.
    pub fn context(&self) -> Option<&str> {
        self.get(CONTEXT_KEY).and_then(Value::as_str)
    }

    /// The `@type` string, if present.
    pub fn entity_type(&self) -> Option<&str> {
        self.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// Whether the record carries anything besides its `@context`.
    pub fn has_data(&self) -> bool {
        self.keys().any(|k| k != CONTEXT_KEY)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = FragmentError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(json) {
            Value::Record(record) => Ok(record),
            _ => Err(FragmentError::NotAnObject),
        }
    }
}

impl From<Record> for serde_json::Value {
    fn from(record: Record) -> Self {
        serde_json::Value::Object(
            record
                .fields
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::from(v)))
                .collect(),
        )
    }
}
