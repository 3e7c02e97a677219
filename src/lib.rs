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

//! # Ro Core Library
//!
//! Ro is a declarative query engine over in-memory sequences of tabular
//! records: a filtering-expression-tree evaluator, a stable multi-key
//! sorting strategy, a grouping strategy, and a pager, orchestrated by a
//! facade that applies them in a fixed, well-defined order and tracks
//! derived state (paging metadata, group metadata).
//!
//! ## Module Overview
//!
//! The library is organized into the following modules:
//!
//! - **record**: Record, record set, and column metadata types
//! - **conditions**: Named filtering conditions per data type
//! - **expressions**: Atomic filtering predicates and the AND/OR tree
//! - **filtering**: Expression-tree evaluation over record sequences
//! - **sorting**: Stable multi-key sorting strategies
//! - **grouping**: Contiguous group partitioning atop sorting
//! - **paging**: Page slicing with error-code metadata
//! - **data_util**: The stateless filter → sort → page facade
//! - **container**: The stateful data + state + transformed-view holder
//! - **config**: JSON-driven construction of declarative state
//! - **errors**: Structured error types
//!
//! ## Feature Flags
//!
//! - `parallel`: Parallel record scanning with Rayon
//! - `full`: Enables all optional features (default)
//!
//! ## Quick Start
//!
//! ```rust
//! use rox::{
//!     RoDataContainer, RoDataState, RoFilteringExpression, RoFilteringExpressionsTree,
//!     RoFilteringLogic, RoFilteringOperand, RoFilteringState, RoNumberFilteringOperand,
//! };
//! use serde_json::json;
//!
//! // Build records (any open JSON map works)
//! let data = vec![
//!     json!({"name": "Anna", "age": 34}).as_object().unwrap().clone(),
//!     json!({"name": "Ben", "age": 17}).as_object().unwrap().clone(),
//! ];
//!
//! // Declare a filter: age > 18
//! let mut tree = RoFilteringExpressionsTree::new(RoFilteringLogic::And);
//! tree.add_expression(RoFilteringExpression::new(
//!     "age",
//!     RoNumberFilteringOperand::instance().condition("greaterThan").unwrap(),
//!     json!(18),
//! ));
//!
//! // Process: filter -> sort -> page
//! let mut container = RoDataContainer::new(data);
//! container.process_with(RoDataState {
//!     filtering: Some(RoFilteringState::new(tree)),
//!     ..Default::default()
//! });
//! assert_eq!(container.transformed_data.len(), 1);
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous, CPU-bound, and runs to completion before
//! returning. The container is single-owner state; embedders running it
//! from multiple threads must serialize access externally.
//!
//! ## Error Handling
//!
//! Configuration mistakes (unknown condition names, over-limit grouping,
//! malformed JSON state) return `Result<T, RoError>`. Data-shape anomalies
//! (missing fields, nulls, out-of-range pages) never error; they are
//! absorbed or reported through result metadata.

#![allow(non_snake_case)]

pub mod conditions;
pub mod config;
pub mod container;
pub mod data_util;
pub mod errors;
pub mod expressions;
pub mod filtering;
pub mod grouping;
pub mod paging;
pub mod record;
pub mod sorting;

pub use errors::{Result, RoError};
pub use record::{RoColumn, RoDataType, RoRecord, RoRecordSet};

pub use conditions::{
    operand_for, RoBooleanFilteringOperand, RoConditionLogic, RoDateFilteringOperand,
    RoFilteringOperand, RoFilteringOperation, RoNumberFilteringOperand, RoStringFilteringOperand,
};
pub use expressions::{
    RoExpressionOperand, RoFilteringExpression, RoFilteringExpressionsTree, RoFilteringLogic,
};
pub use filtering::{RoDefaultFilteringStrategy, RoFilteringState, RoFilteringStrategy};
pub use sorting::{
    compare_by_expression, compare_records, default_compare_values, RoDefaultSortingStrategy,
    RoSortingDirection, RoSortingExpression, RoSortingState, RoSortingStrategy,
    RoStableSortingStrategy,
};
pub use grouping::{
    RoGroupByRecord, RoGroupByResult, RoGroupingStrategy, MAX_GROUPING_EXPRESSIONS,
};
pub use paging::{RoPagedResult, RoPager, RoPagingError, RoPagingMetadata, RoPagingState};

pub use container::{RoDataAccess, RoDataContainer, RoRecordInfo};
pub use data_util::{RoDataState, RoDataUtil};
pub use config::{
    data_state_from_config, filtering_expression_from_config, filtering_tree_from_config,
    paging_state_from_config, sorting_expression_from_config,
};
