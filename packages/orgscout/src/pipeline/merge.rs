//! Deep merge of canonical records.
//!
//! Merging folds any number of partial records, found independently on the
//! same page, into one. For every field of the right-hand record:
//!
//! - nested records merge recursively
//! - sequences are unioned: the left side's elements keep their order and
//!   new elements from the right side are appended
//! - a left-hand scalar meeting a right-hand sequence is appended to it
//! - scalars on the right overwrite the left (last writer wins)
//!
//! Sequence membership uses structural [`Value`] equality, so two identical
//! nested records (e.g. the same `Place` found twice) collapse into one,
//! while records that differ in any field are both kept.
//!
//! Inputs are never mutated; every call allocates a fresh record.

use crate::types::record::{Record, Scalar, Value};

/// Merge `b` into `a`, returning a new record.
pub fn merge(a: &Record, b: &Record) -> Record {
    let mut merged = a.clone();

    for (key, incoming) in b {
        let value = match (a.get(key), incoming) {
            (None, incoming) => incoming.clone(),
            (Some(existing), Value::Record(record)) => merge_into_record(existing, record),
            (Some(existing), Value::Sequence(items)) => merge_into_sequence(existing, items),
            (Some(_), scalar @ Value::Scalar(_)) => scalar.clone(),
        };
        merged.insert(key.clone(), value);
    }

    merged
}

/// Left-to-right fold of [`merge`] over any number of records.
///
/// Returns `None` when there is nothing to merge.
pub fn merge_all<I>(records: I) -> Option<Record>
where
    I: IntoIterator<Item = Record>,
{
    records.into_iter().reduce(|acc, next| merge(&acc, &next))
}

fn merge_into_record(existing: &Value, incoming: &Record) -> Value {
    match existing {
        Value::Record(current) => Value::Record(merge(current, incoming)),
        Value::Sequence(items) => union(items, std::iter::once(&Value::Record(incoming.clone()))),
        // A scalar cannot hold fields: it is coerced to an empty record.
        Value::Scalar(_) => Value::Record(merge(&Record::new(), incoming)),
    }
}

fn merge_into_sequence(existing: &Value, incoming: &[Value]) -> Value {
    match existing {
        Value::Sequence(items) => union(items, incoming),
        Value::Scalar(Scalar::Null) => Value::Sequence(incoming.to_vec()),
        other => union(incoming, std::iter::once(other)),
    }
}

/// `base` followed by every element of `extra` not yet present.
fn union<'a>(base: &[Value], extra: impl IntoIterator<Item = &'a Value>) -> Value {
    let mut items = base.to_vec();
    for value in extra {
        if !items.contains(value) {
            items.push(value.clone());
        }
    }
    Value::Sequence(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(json: serde_json::Value) -> Record {
        Record::try_from(json).unwrap()
    }

    #[test]
    fn test_arrays_are_deduplicated_and_appended() {
        let a = record(json!({"emails": ["a@a.com", "b@b.net"]}));
        let b = record(json!({"emails": ["a@a.com", "c@c.net"]}));

        let merged = merge(&a, &b);

        assert_eq!(
            merged,
            record(json!({"emails": ["a@a.com", "b@b.net", "c@c.net"]}))
        );
    }

    #[test]
    fn test_scalar_is_promoted_into_array() {
        let a = record(json!({"tag": "x"}));
        let b = record(json!({"tag": ["y"]}));

        assert_eq!(merge(&a, &b), record(json!({"tag": ["y", "x"]})));
    }

    #[test]
    fn test_promoted_scalar_is_not_duplicated() {
        let a = record(json!({"tag": "y"}));
        let b = record(json!({"tag": ["y", "z"]}));

        assert_eq!(merge(&a, &b), record(json!({"tag": ["y", "z"]})));
    }

    #[test]
    fn test_null_counts_as_absent_for_arrays() {
        let a = record(json!({"tag": null}));
        let b = record(json!({"tag": ["y"]}));

        assert_eq!(merge(&a, &b), record(json!({"tag": ["y"]})));
    }

    #[test]
    fn test_scalars_last_writer_wins() {
        let a = record(json!({"name": "Old", "url": "https://a.example"}));
        let b = record(json!({"name": "New"}));

        let merged = merge(&a, &b);

        assert_eq!(merged.get("name"), Some(&Value::from("New")));
        assert_eq!(merged.get("url"), Some(&Value::from("https://a.example")));
    }

    #[test]
    fn test_nested_records_merge_recursively() {
        let a = record(json!({
            "address": {"@type": "PostalAddress", "streetAddress": "47 Newton Street"},
            "contactPoint": {"telephone": ["+44 161 1080"]}
        }));
        let b = record(json!({
            "address": {"postalCode": "M1 1FT"},
            "contactPoint": {"telephone": ["+44 161 1080", "0800 000 000"]}
        }));

        let merged = merge(&a, &b);

        assert_eq!(
            merged,
            record(json!({
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": "47 Newton Street",
                    "postalCode": "M1 1FT"
                },
                "contactPoint": {"telephone": ["+44 161 1080", "0800 000 000"]}
            }))
        );
    }

    #[test]
    fn test_record_replaces_scalar() {
        let a = record(json!({"address": "47 Newton Street"}));
        let b = record(json!({"address": {"@type": "PostalAddress", "postalCode": "M1 1FT"}}));

        assert_eq!(
            merge(&a, &b),
            record(json!({"address": {"@type": "PostalAddress", "postalCode": "M1 1FT"}}))
        );
    }

    #[test]
    fn test_record_joins_existing_sequence() {
        let a = record(json!({"place": [{"@type": "Place", "name": "Madrid"}]}));
        let b = record(json!({"place": {"@type": "Place", "name": "Manchester"}}));

        assert_eq!(
            merge(&a, &b),
            record(json!({"place": [
                {"@type": "Place", "name": "Madrid"},
                {"@type": "Place", "name": "Manchester"}
            ]}))
        );
    }

    #[test]
    fn test_identical_nested_records_in_arrays_collapse() {
        let a = record(json!({"place": [{"@type": "Place", "name": "New York"}]}));
        let b = record(json!({"place": [
            {"@type": "Place", "name": "New York"},
            {"@type": "Place", "name": "New York", "address": "NY"}
        ]}));

        let merged = merge(&a, &b);

        // Only the exact duplicate collapses; the richer entry is kept separately.
        assert_eq!(
            merged,
            record(json!({"place": [
                {"@type": "Place", "name": "New York"},
                {"@type": "Place", "name": "New York", "address": "NY"}
            ]}))
        );
    }

    #[test]
    fn test_key_order_keeps_left_then_new() {
        let a = record(json!({"@context": "http://schema.org", "name": "A"}));
        let b = record(json!({"email": ["e@a.com"], "name": "B"}));

        let keys: Vec<_> = merge(&a, &b).keys().cloned().collect();
        assert_eq!(keys, vec!["@context", "name", "email"]);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = record(json!({"sameAs": ["https://twitter.com/a"]}));
        let b = record(json!({"sameAs": ["https://facebook.com/a"]}));
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = merge(&a, &b);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_merge_with_itself_is_identity() {
        let r = record(json!({
            "@context": "http://schema.org",
            "@type": "Organization",
            "name": "CANDDi",
            "address": {"@type": "PostalAddress", "addressCountry": "GB"},
            "sameAs": ["https://twitter.com/canddi/", "https://www.facebook.com/thisiscanddi"]
        }));

        assert_eq!(merge(&r, &r), r);
    }

    #[test]
    fn test_merge_all_folds_left_to_right() {
        let records = vec![
            record(json!({"name": "first", "email": ["a@a.com"]})),
            record(json!({"name": "second", "email": ["b@b.com"]})),
            record(json!({"name": "third", "email": ["a@a.com"]})),
        ];

        let merged = merge_all(records).unwrap();

        assert_eq!(
            merged,
            record(json!({"name": "third", "email": ["a@a.com", "b@b.com"]}))
        );
    }

    #[test]
    fn test_merge_all_of_nothing_is_none() {
        assert!(merge_all(Vec::new()).is_none());
    }
}
