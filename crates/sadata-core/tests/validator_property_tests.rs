#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use sadata_core::query::{validate_parameters, QueryParams};

fn grammar_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("maxResults".to_string()),
        Just("nextToken".to_string()),
        Just("resourceId".to_string()),
        (0u32..1000).prop_map(|n| format!("filter-key-{}", n)),
        (0u32..1000).prop_map(|n| format!("filter-key-{}-value", n)),
    ]
}

fn well_formed_params() -> impl Strategy<Value = QueryParams> {
    prop::collection::btree_map(
        grammar_key(),
        prop::collection::vec(".{0,8}", 0..4),
        0..8,
    )
    .prop_map(|mut entries: BTreeMap<String, Vec<String>>| {
        if entries.contains_key("nextToken") && !entries.contains_key("maxResults") {
            entries.insert("maxResults".to_string(), vec!["10".to_string()]);
        }
        if entries.contains_key("maxResults") {
            entries.remove("resourceId");
        }
        let mut params = QueryParams::new();
        for (key, values) in entries {
            params.insert(key, values);
        }
        params
    })
}

proptest! {
    #[test]
    fn validator_accepts_well_formed_maps(params in well_formed_params()) {
        prop_assert!(validate_parameters(&params).is_ok());
    }

    #[test]
    fn validator_rejects_any_foreign_key(key in "[a-zA-Z][a-zA-Z0-9_]{0,12}") {
        prop_assume!(!["maxResults", "nextToken", "resourceId"].contains(&key.as_str()));
        let params = QueryParams::new().with(key, ["1"]);
        prop_assert!(validate_parameters(&params).is_err());
    }
}
