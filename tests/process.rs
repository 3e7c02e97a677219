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

//! # Ro Pipeline Tests
//!
//! Tests for the fixed filter -> sort -> page processing order and its
//! metadata side effects.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test process
//! ```

mod common;

use serde_json::json;

use rox::{
    RoDataState, RoDataUtil, RoFilteringExpression, RoFilteringExpressionsTree, RoFilteringLogic,
    RoFilteringOperand, RoFilteringState, RoNumberFilteringOperand, RoPagingError, RoPagingState,
    RoSortingDirection, RoSortingExpression, RoSortingState,
};

fn filter_state(condition: &str, search: serde_json::Value) -> RoFilteringState {
    let mut tree = RoFilteringExpressionsTree::new(RoFilteringLogic::And);
    tree.add_expression(RoFilteringExpression::new(
        "number",
        RoNumberFilteringOperand::instance()
            .condition(condition)
            .unwrap(),
        search,
    ));
    RoFilteringState::new(tree)
}

fn full_state() -> RoDataState {
    RoDataState {
        filtering: Some(filter_state("lessThanOrEqualTo", json!(2))),
        sorting: Some(RoSortingState::new(vec![RoSortingExpression::new(
            "number",
            RoSortingDirection::Desc,
        )])),
        paging: Some(RoPagingState::new(1, 2)),
    }
}

#[test]
fn process_applies_filter_then_sort_then_page() {
    let data = common::sample_data();
    let mut state = full_state();
    let res = RoDataUtil::process(&data, &mut state);

    // filter keeps [0,1,2], sort gives [2,1,0], page 1 of size 2 gives [0]
    assert_eq!(common::numbers(&res), vec![0]);
    let metadata = state.paging.unwrap().metadata.unwrap();
    assert_eq!(metadata.error, RoPagingError::None);
    assert_eq!(metadata.count_pages, 2);
    assert_eq!(metadata.count_records, 3);
}

#[test]
fn process_equals_manual_stage_composition() {
    let data = common::sample_data();
    let mut state = full_state();
    let processed = RoDataUtil::process(&data, &mut state);

    let mut manual_state = full_state();
    let filtered = RoDataUtil::filter(&data, manual_state.filtering.as_ref().unwrap());
    let sorted = RoDataUtil::sort(&filtered, manual_state.sorting.as_ref().unwrap());
    let paged = RoDataUtil::page(&sorted, manual_state.paging.as_mut().unwrap());

    assert_eq!(processed, paged);
    assert_eq!(
        state.paging.unwrap().metadata,
        manual_state.paging.unwrap().metadata
    );
}

#[test]
fn absent_stages_are_no_ops() {
    let data = common::sample_data();

    let mut state = RoDataState::default();
    let res = RoDataUtil::process(&data, &mut state);
    assert_eq!(res, data);

    let mut state = RoDataState {
        sorting: Some(RoSortingState::new(vec![RoSortingExpression::new(
            "number",
            RoSortingDirection::Desc,
        )])),
        ..Default::default()
    };
    let res = RoDataUtil::process(&data, &mut state);
    assert_eq!(common::numbers(&res), vec![4, 3, 2, 1, 0]);
}

#[test]
fn process_is_idempotent_for_unchanged_state() {
    let data = common::sample_data();
    let mut state = full_state();
    let first = RoDataUtil::process(&data, &mut state);
    let second = RoDataUtil::process(&data, &mut state);
    assert_eq!(first, second);
}

#[test]
fn paging_error_inside_process_degrades_gracefully() {
    let data = common::sample_data();
    let mut state = RoDataState {
        filtering: Some(filter_state("greaterThan", json!(2))),
        paging: Some(RoPagingState::new(5, 2)),
        ..Default::default()
    };
    let res = RoDataUtil::process(&data, &mut state);

    // The rejected page request passes the filtered sequence through.
    assert_eq!(common::numbers(&res), vec![3, 4]);
    assert_eq!(
        state.paging.unwrap().metadata.unwrap().error,
        RoPagingError::IncorrectPageIndex
    );
}
