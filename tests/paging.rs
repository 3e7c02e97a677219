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

//! # Ro Paging Tests
//!
//! Tests for page slicing, page-count metadata, and the boundary error
//! codes.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test paging
//! ```

mod common;

use rox::{RoDataUtil, RoPager, RoPagingError, RoPagingState};

#[test]
fn paginates_five_records_three_per_page() {
    let data = common::sample_data();

    let mut state = RoPagingState::new(0, 3);
    let res = RoDataUtil::page(&data, &mut state);
    let metadata = state.metadata.expect("metadata written back");
    assert_eq!(metadata.error, RoPagingError::None);
    assert_eq!(metadata.count_pages, 2);
    assert_eq!(metadata.count_records, 5);
    assert_eq!(common::numbers(&res), vec![0, 1, 2]);

    let mut state = RoPagingState::new(1, 3);
    let res = RoDataUtil::page(&data, &mut state);
    let metadata = state.metadata.expect("metadata written back");
    assert_eq!(metadata.error, RoPagingError::None);
    assert_eq!(metadata.count_pages, 2);
    assert_eq!(common::numbers(&res), vec![3, 4]);
}

#[test]
fn rejects_out_of_range_page_indexes() {
    let data = common::sample_data();

    let mut state = RoPagingState::new(-1, 3);
    let res = RoDataUtil::page(&data, &mut state);
    assert_eq!(
        state.metadata.unwrap().error,
        RoPagingError::IncorrectPageIndex
    );
    // The rejected request degrades to the input unchanged.
    assert_eq!(common::numbers(&res), vec![0, 1, 2, 3, 4]);

    let mut state = RoPagingState::new(2, 3);
    RoDataUtil::page(&data, &mut state);
    assert_eq!(
        state.metadata.unwrap().error,
        RoPagingError::IncorrectPageIndex
    );
}

#[test]
fn rejects_non_positive_records_per_page() {
    let data = common::sample_data();
    // Page size is validated before the index.
    let mut state = RoPagingState::new(3, 0);
    let res = RoDataUtil::page(&data, &mut state);
    assert_eq!(
        state.metadata.unwrap().error,
        RoPagingError::IncorrectRecordsPerPage
    );
    assert_eq!(res.len(), data.len());
}

#[test]
fn paging_an_empty_sequence_has_no_valid_page() {
    let state = RoPagingState::new(0, 3);
    let res = RoPager::page::<i64>(&[], &state);
    assert_eq!(res.metadata.error, RoPagingError::IncorrectPageIndex);
    assert_eq!(res.metadata.count_pages, 0);
    assert_eq!(res.metadata.count_records, 0);
}

#[test]
fn pages_arbitrary_element_types() {
    let values: Vec<i64> = (0..10).collect();
    let state = RoPagingState::new(2, 4);
    let res = RoPager::page(&values, &state);
    assert_eq!(res.metadata.error, RoPagingError::None);
    assert_eq!(res.metadata.count_pages, 3);
    assert_eq!(res.data, vec![8, 9]);
}

#[test]
fn pager_is_pure_and_facade_writes_metadata() {
    let data = common::sample_data();
    let state = RoPagingState::new(0, 2);

    // The pager itself never touches the state.
    let res = RoPager::page(&data, &state);
    assert_eq!(res.metadata.error, RoPagingError::None);
    assert!(state.metadata.is_none());

    // The facade layer exposes the in/out metadata contract.
    let mut state = state;
    RoDataUtil::page(&data, &mut state);
    assert_eq!(state.metadata.unwrap(), res.metadata);
}

#[test]
fn last_page_holds_the_remainder() {
    let data = common::sample_data();
    let state = RoPagingState::new(1, 4);
    let res = RoPager::page(&data, &state);
    assert_eq!(res.metadata.count_pages, 2);
    assert_eq!(common::numbers(&res.data), vec![4]);
}
