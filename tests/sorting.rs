//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ro.
//! The Ro project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Ro Sorting Tests
//!
//! Tests for multi-key ordering, direction, case sensitivity, null
//! placement, and the stable sort guarantee.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test sorting
//! ```

mod common;

use std::cmp::Ordering;
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Value};

use rox::{
    default_compare_values, RoDataUtil, RoDefaultSortingStrategy, RoRecord, RoRecordSet,
    RoSortingDirection, RoSortingExpression, RoSortingState, RoSortingStrategy,
    RoStableSortingStrategy,
};

fn sort_with(data: &[RoRecord], expressions: Vec<RoSortingExpression>) -> RoRecordSet {
    RoDataUtil::sort(data, &RoSortingState::new(expressions))
}

#[test]
fn sorts_descending_number() {
    let data = common::sample_data();
    let res = sort_with(
        &data,
        vec![RoSortingExpression::new("number", RoSortingDirection::Desc)],
    );
    assert_eq!(common::numbers(&res), vec![4, 3, 2, 1, 0]);
}

#[test]
fn sorts_ascending_boolean() {
    let data = common::sample_data();
    let res = sort_with(
        &data,
        vec![RoSortingExpression::new("boolean", RoSortingDirection::Asc)],
    );
    assert_eq!(
        common::column_values(&res, "boolean"),
        vec![
            json!(false),
            json!(false),
            json!(false),
            json!(true),
            json!(true)
        ]
    );
}

#[test]
fn sorts_multi_key_boolean_desc_date_asc() {
    let data = common::sample_data();
    let res = sort_with(
        &data,
        vec![
            RoSortingExpression::new("boolean", RoSortingDirection::Desc)
                .with_ignore_case(false),
            RoSortingExpression::new("date", RoSortingDirection::Asc).with_ignore_case(false),
        ],
    );
    assert_eq!(common::numbers(&res), vec![1, 3, 0, 2, 4]);
}

#[test]
fn case_sensitivity_changes_string_order() {
    let mut data = common::sample_data();
    let upper = data[4]
        .get("string")
        .and_then(Value::as_str)
        .unwrap()
        .to_uppercase();
    data[4].insert("string".into(), json!(upper));

    // Case-sensitive: upper-case letters order before lower-case ones, so
    // the uppercased row sinks to the end of a descending sort.
    let res = sort_with(
        &data,
        vec![RoSortingExpression::new("string", RoSortingDirection::Desc).with_ignore_case(false)],
    );
    assert_eq!(common::numbers(&res), vec![3, 2, 1, 0, 4]);

    // Case-insensitive: the same sort ignores the casing.
    let res = sort_with(
        &data,
        vec![RoSortingExpression::new("string", RoSortingDirection::Desc)],
    );
    assert_eq!(common::numbers(&res), vec![4, 3, 2, 1, 0]);
}

#[test]
fn nulls_sort_first_ascending() {
    let data = vec![
        common::record(json!({"number": 0, "value": "b"})),
        common::record(json!({"number": 1, "value": null})),
        common::record(json!({"number": 2, "value": "a"})),
        common::record(json!({"number": 3})),
    ];

    let res = sort_with(
        &data,
        vec![RoSortingExpression::new("value", RoSortingDirection::Asc)],
    );
    // Null and missing are mutually equal, so input order breaks the tie.
    assert_eq!(common::numbers(&res), vec![1, 3, 2, 0]);

    let res = sort_with(
        &data,
        vec![RoSortingExpression::new("value", RoSortingDirection::Desc)],
    );
    assert_eq!(common::numbers(&res), vec![0, 2, 1, 3]);
}

#[test]
fn compares_dates_chronologically_across_encodings() {
    let data = vec![
        common::record(json!({"number": 0, "when": "2026-08-10"})),
        common::record(json!({"number": 1, "when": "2026-08-08T12:30:00"})),
        common::record(json!({"number": 2, "when": "2026-08-09"})),
    ];
    let res = sort_with(
        &data,
        vec![RoSortingExpression::new("when", RoSortingDirection::Asc)],
    );
    assert_eq!(common::numbers(&res), vec![1, 2, 0]);
}

#[test]
fn default_compare_is_a_total_order_over_samples() {
    let values = [
        None,
        Some(json!(null)),
        Some(json!(false)),
        Some(json!(true)),
        Some(json!(1)),
        Some(json!(2.5)),
        Some(json!("a")),
        Some(json!("b")),
    ];
    for left in &values {
        for right in &values {
            let forward = default_compare_values(left.as_ref(), right.as_ref());
            let backward = default_compare_values(right.as_ref(), left.as_ref());
            assert_eq!(forward, backward.reverse());
        }
    }
    assert_eq!(
        default_compare_values(None, Some(&json!(null))),
        Ordering::Equal
    );
}

fn tagged_rows(count: usize) -> RoRecordSet {
    (0..count)
        .map(|i| {
            common::record(json!({
                "number": (i % 2) as i64,
                "tag": format!("tag{i:03}"),
            }))
        })
        .collect()
}

fn tags_for(data: &[RoRecord], key: i64) -> Vec<String> {
    data.iter()
        .filter(|record| record.get("number").and_then(Value::as_i64) == Some(key))
        .map(|record| {
            record
                .get("tag")
                .and_then(Value::as_str)
                .unwrap()
                .to_string()
        })
        .collect()
}

#[test]
fn stable_sort_preserves_tag_order_across_resorts() {
    let data = tagged_rows(100);
    let expressions = vec![RoSortingExpression::new("number", RoSortingDirection::Asc)];

    let once = RoDefaultSortingStrategy::instance().sort(&data, &expressions);
    let twice = RoDefaultSortingStrategy::instance().sort(&once, &expressions);
    assert_eq!(once, twice);

    for key in [0, 1] {
        let tags = tags_for(&once, key);
        let mut expected = tags.clone();
        expected.sort();
        assert_eq!(tags, expected, "tag order disturbed in group {key}");
    }
}

#[test]
fn index_tagged_variant_is_deterministic_across_resorts() {
    let data = tagged_rows(100);
    let expressions = vec![RoSortingExpression::new("number", RoSortingDirection::Asc)];

    let once = RoStableSortingStrategy::instance().sort(&data, &expressions);
    let twice = RoStableSortingStrategy::instance().sort(&once, &expressions);
    assert_eq!(once, twice);
    // Both strategies agree on the stable result.
    assert_eq!(
        once,
        RoDefaultSortingStrategy::instance().sort(&data, &expressions)
    );
}

/// Per-key comparator reversing the pinned value order.
#[derive(Debug)]
struct ReversedValues;

impl RoSortingStrategy for ReversedValues {
    fn compare_values(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        default_compare_values(a, b).reverse()
    }

    fn sort(&self, data: &[RoRecord], expressions: &[RoSortingExpression]) -> RoRecordSet {
        RoDefaultSortingStrategy::instance().sort(data, expressions)
    }
}

#[test]
fn per_expression_strategy_overrides_value_comparison() {
    let data = common::sample_data();
    let res = sort_with(
        &data,
        vec![
            RoSortingExpression::new("number", RoSortingDirection::Asc)
                .with_strategy(Arc::new(ReversedValues)),
        ],
    );
    assert_eq!(common::numbers(&res), vec![4, 3, 2, 1, 0]);
}

#[test]
fn empty_expression_list_keeps_input_order() {
    let data = common::sample_data();
    let res = sort_with(&data, Vec::new());
    assert_eq!(res, data);
}

proptest! {
    /// Re-sorting an already sorted sequence never reorders equal keys.
    #[test]
    fn resort_keeps_equal_key_order(keys in proptest::collection::vec(0..3i64, 1..80)) {
        let data: RoRecordSet = keys
            .iter()
            .enumerate()
            .map(|(i, key)| common::record(json!({"number": key, "tag": i as i64})))
            .collect();
        let expressions = vec![RoSortingExpression::new("number", RoSortingDirection::Asc)];

        let once = RoDefaultSortingStrategy::instance().sort(&data, &expressions);
        let twice = RoDefaultSortingStrategy::instance().sort(&once, &expressions);
        prop_assert_eq!(&once, &twice);

        for key in 0..3 {
            let tags: Vec<i64> = once
                .iter()
                .filter(|record| record.get("number").and_then(Value::as_i64) == Some(key))
                .map(|record| record.get("tag").and_then(Value::as_i64).unwrap())
                .collect();
            let mut expected = tags.clone();
            expected.sort();
            prop_assert_eq!(tags, expected);
        }
    }
}
