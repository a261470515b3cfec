//! Property-based tests for sample parameter parsing
//!
//! - Identifier extraction round-trips and rejections
//! - Timestamp conversion invariants
//! - Node order preservation
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use sample_service::params::{create_sample_params, datetime_to_epoch_millis, get_id_from_object};
use sample_service::sample::SubSampleType;
use serde_json::{json, Map, Value};
use uuid::Uuid;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Generate a container holding `id` -> value
fn id_container(value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("id".to_string(), value);
    map
}

/// Generate a parent-linked chain of nodes: each node's parent is its predecessor
fn arb_chain(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{1,8}", 1..=max_len)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn chain_params(ids: &[String]) -> Value {
    let nodes: Vec<Value> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            if i == 0 {
                json!({"id": id, "type": "BioReplicate"})
            } else {
                json!({"id": id, "type": "SubSample", "parent": ids[i - 1]})
            }
        })
        .collect();
    json!({"sample": {"node_tree": nodes}})
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: any hyphenated UUID string parses to the same UUID
    #[test]
    fn prop_valid_uuid_round_trips(bits in any::<u128>()) {
        let uuid = Uuid::from_u128(bits);
        let container = id_container(Value::String(uuid.hyphenated().to_string()));
        prop_assert_eq!(get_id_from_object(Some(&container)), Ok(Some(uuid)));
    }

    /// Property: integers are never sample IDs, and the message names the value
    #[test]
    fn prop_integer_id_rejected(n in any::<i64>()) {
        let container = id_container(json!(n));
        let err = get_id_from_object(Some(&container)).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("Sample ID {n} must be a UUID string"));
    }

    /// Property: strings with non-hex characters are never sample IDs
    #[test]
    fn prop_non_hex_string_rejected(s in "[g-z]{1,40}") {
        let container = id_container(Value::String(s.clone()));
        let err = get_id_from_object(Some(&container)).unwrap_err();
        prop_assert!(err.to_string().contains(&s));
        prop_assert!(err.to_string().ends_with("must be a UUID string"));
    }

    /// Property: whole-millisecond instants convert exactly
    #[test]
    fn prop_whole_millis_exact(ms in -8_000_000_000_000_i64..8_000_000_000_000_i64) {
        let dt = chrono::DateTime::from_timestamp_millis(ms).unwrap();
        prop_assert_eq!(datetime_to_epoch_millis(Some(&dt)), Ok(ms));
    }

    /// Property: conversion is never off by more than half a millisecond
    #[test]
    fn prop_rounding_within_half_milli(
        secs in -10_000_000_000_i64..10_000_000_000_i64,
        nanos in 0u32..1_000_000_000,
    ) {
        let dt = chrono::DateTime::from_timestamp(secs, nanos).unwrap();
        let millis = i128::from(datetime_to_epoch_millis(Some(&dt)).unwrap());
        let exact = i128::from(secs) * 1_000_000_000 + i128::from(nanos);
        prop_assert!((millis * 1_000_000 - exact).abs() <= 500_000);
    }

    /// Property: parsed nodes keep input order and parent links
    #[test]
    fn prop_chain_order_preserved(ids in arb_chain(20)) {
        let (sample, _, _) = create_sample_params(Some(&chain_params(&ids))).unwrap();
        let got: Vec<&str> = sample.nodes().iter().map(|n| n.id()).collect();
        prop_assert_eq!(got, ids.iter().map(String::as_str).collect::<Vec<_>>());
        for (i, node) in sample.nodes().iter().enumerate().skip(1) {
            prop_assert_eq!(node.parent(), Some(ids[i - 1].as_str()));
            prop_assert_eq!(node.node_type(), SubSampleType::SubSample);
        }
    }

    /// Property: reversing a chain of two or more nodes breaks parent ordering
    #[test]
    fn prop_reversed_chain_rejected(ids in arb_chain(20).prop_filter("need a child", |ids| ids.len() > 1)) {
        let mut nodes = chain_params(&ids)["sample"]["node_tree"].as_array().unwrap().clone();
        nodes.reverse();
        let params = json!({"sample": {"node_tree": nodes}});
        let err = create_sample_params(Some(&params)).unwrap_err();
        let last = ids.len() - 1;
        prop_assert_eq!(
            err.to_string(),
            format!(
                "Parent {} of node {} does not appear in node list prior to node.",
                ids[last - 1], ids[last]
            )
        );
    }
}
