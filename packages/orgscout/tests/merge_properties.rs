//! Property tests for the merge engine.

use orgscout::{merge, merge_all, Record, Value};
use proptest::prelude::*;
use serde_json::json;

fn scalar() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        (0i64..5).prop_map(serde_json::Value::from),
        prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(serde_json::Value::from),
    ]
}

fn json_value() -> impl Strategy<Value = serde_json::Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map(key(), inner, 0..4)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

fn key() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["name", "email", "sameAs", "place", "address"])
        .prop_map(String::from)
}

fn record() -> impl Strategy<Value = Record> {
    prop::collection::btree_map(key(), json_value(), 0..5).prop_map(|m| {
        let object = serde_json::Value::Object(m.into_iter().collect());
        Record::try_from(object).unwrap()
    })
}

fn list_record() -> impl Strategy<Value = Record> {
    prop::collection::vec(scalar(), 0..6)
        .prop_map(|items| Record::try_from(json!({ "tags": items })).unwrap())
}

proptest! {
    #[test]
    fn merge_is_idempotent(a in record()) {
        prop_assert_eq!(merge(&a, &a), a);
    }

    #[test]
    fn empty_record_is_identity(a in record()) {
        prop_assert_eq!(merge(&a, &Record::new()), a.clone());
        prop_assert_eq!(merge(&Record::new(), &a), a);
    }

    #[test]
    fn merge_keeps_every_key(a in record(), b in record()) {
        let merged = merge(&a, &b);
        for key in a.keys().chain(b.keys()) {
            prop_assert!(merged.contains_key(key));
        }
        prop_assert!(merged.len() <= a.len() + b.len());
    }

    #[test]
    fn right_scalars_win(a in record(), b in record()) {
        let merged = merge(&a, &b);
        for (key, value) in &b {
            if let Value::Scalar(_) = value {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    #[test]
    fn sequence_union_loses_nothing(a in list_record(), b in list_record()) {
        let merged = merge(&a, &b);
        let items = merged.get("tags").and_then(Value::as_sequence).unwrap();

        let left = a.get("tags").and_then(Value::as_sequence).unwrap();
        let right = b.get("tags").and_then(Value::as_sequence).unwrap();

        prop_assert_eq!(&items[..left.len()], &left[..]);
        for value in right {
            prop_assert!(items.contains(value));
        }
    }

    #[test]
    fn sequence_union_is_associative(
        a in list_record(),
        b in list_record(),
        c in list_record(),
    ) {
        let left = merge(&merge(&a, &b), &c);
        let right = merge(&a, &merge(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn merge_all_is_a_left_fold(a in record(), b in record(), c in record()) {
        let folded = merge_all(vec![a.clone(), b.clone(), c.clone()]);
        prop_assert_eq!(folded, Some(merge(&merge(&a, &b), &c)));
    }

    #[test]
    fn merge_does_not_mutate_inputs(a in record(), b in record()) {
        let (before_a, before_b) = (a.clone(), b.clone());
        let _ = merge(&a, &b);
        prop_assert_eq!(a, before_a);
        prop_assert_eq!(b, before_b);
    }
}

#[test]
fn merging_two_places_found_on_one_page() {
    let structured = Record::try_from(json!({
        "@context": "http://schema.org",
        "@type": "Organization",
        "name": "CANDDi",
        "place": {"@type": "Place", "name": "Manchester"}
    }))
    .unwrap();
    let unstructured = Record::try_from(json!({
        "@context": "http://schema.org",
        "place": [
            {"@type": "Place", "name": "Manchester"},
            {"@type": "Place", "name": "London"}
        ]
    }))
    .unwrap();

    let merged = merge(&structured, &unstructured);

    assert_eq!(
        serde_json::Value::from(merged),
        json!({
            "@context": "http://schema.org",
            "@type": "Organization",
            "name": "CANDDi",
            "place": [
                {"@type": "Place", "name": "Manchester"},
                {"@type": "Place", "name": "London"}
            ]
        })
    );
}
