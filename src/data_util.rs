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

//! # Ro Data Utility Module
//!
//! The stateless orchestration facade. [`RoDataUtil`] exposes each pipeline
//! stage standalone and composes them in the canonical fixed order:
//! **filter, then sort, then page**. A stage is a no-op when its sub-state
//! is absent, and the order is a contract — paging always observes the
//! filtered, sorted sequence.
//!
//! `page` and `process` write the computed paging metadata back into the
//! supplied state, which callers treat as an in/out parameter; the
//! underlying [`RoPager`] stays pure.

use crate::errors::Result;
use crate::filtering::{RoDefaultFilteringStrategy, RoFilteringState, RoFilteringStrategy};
use crate::grouping::{RoGroupByResult, RoGroupingStrategy};
use crate::paging::{RoPager, RoPagingError, RoPagingState};
use crate::record::{RoDataType, RoRecord, RoRecordSet};
use crate::sorting::{
    RoDefaultSortingStrategy, RoSortingExpression, RoSortingState, RoSortingStrategy,
};

/// The declarative query configuration of a full pipeline run.
///
/// Every key is optional; an absent key skips that stage.
#[derive(Debug, Default)]
pub struct RoDataState {
    /// Filtering stage configuration.
    pub filtering: Option<RoFilteringState>,
    /// Sorting stage configuration.
    pub sorting: Option<RoSortingState>,
    /// Paging stage configuration.
    pub paging: Option<RoPagingState>,
}

/// Stateless data-shaping functions over record sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoDataUtil;

impl RoDataUtil {
    /// Filters `data` through the state's expressions tree.
    ///
    /// The state's custom strategy applies when present, the default
    /// strategy otherwise.
    pub fn filter(data: &[RoRecord], state: &RoFilteringState) -> RoRecordSet {
        let strategy = state
            .strategy
            .as_deref()
            .unwrap_or(RoDefaultFilteringStrategy::instance());
        let records = strategy.filter(data, &state.expressions_tree);
        log::debug!("filter kept {} of {} records", records.len(), data.len());
        records
    }

    /// Sorts `data` by the state's expression list.
    pub fn sort(data: &[RoRecord], state: &RoSortingState) -> RoRecordSet {
        let strategy = state
            .strategy
            .as_deref()
            .unwrap_or(RoDefaultSortingStrategy::instance());
        strategy.sort(data, &state.expressions)
    }

    /// Pages any sequence, writing the metadata back into `state`.
    ///
    /// Invalid requests return the input unchanged and record the error
    /// code in `state.metadata`.
    pub fn page<T: Clone>(data: &[T], state: &mut RoPagingState) -> Vec<T> {
        let result = RoPager::page(data, state);
        if result.metadata.error != RoPagingError::None {
            log::warn!(
                "paging request rejected ({:?}): index {}, records_per_page {}",
                result.metadata.error,
                state.index,
                state.records_per_page
            );
        }
        state.metadata = Some(result.metadata);
        result.data
    }

    /// Sorts and partitions `data` into contiguous group-by records.
    pub fn group(
        data: &[RoRecord],
        expressions: &[RoSortingExpression],
    ) -> Result<RoGroupByResult> {
        RoGroupingStrategy::instance().group_by(data, expressions)
    }

    /// Runs the full pipeline in the fixed order filter, sort, page.
    ///
    /// Mutates `state.paging.metadata` as a side effect when paging was
    /// requested.
    pub fn process(data: &[RoRecord], state: &mut RoDataState) -> RoRecordSet {
        let mut records = match &state.filtering {
            Some(filtering) => Self::filter(data, filtering),
            None => data.to_vec(),
        };
        if let Some(sorting) = &state.sorting {
            records = Self::sort(&records, sorting);
        }
        if let Some(paging) = &mut state.paging {
            records = Self::page(&records, paging);
        }
        log::debug!("process produced {} records", records.len());
        records
    }

    /// The closed table of legal condition names per data type.
    ///
    /// This is a lookup table, not a computed list; it mirrors the operand
    /// catalogs by construction.
    pub fn filtering_conditions(data_type: RoDataType) -> &'static [&'static str] {
        match data_type {
            RoDataType::String => &[
                "contains",
                "doesNotContain",
                "startsWith",
                "endsWith",
                "equals",
                "doesNotEqual",
                "empty",
                "notEmpty",
                "null",
                "notNull",
            ],
            RoDataType::Number => &[
                "equals",
                "doesNotEqual",
                "greaterThan",
                "lessThan",
                "greaterThanOrEqualTo",
                "lessThanOrEqualTo",
                "empty",
                "notEmpty",
                "null",
                "notNull",
            ],
            RoDataType::Boolean => &[
                "all", "true", "false", "empty", "notEmpty", "null", "notNull",
            ],
            RoDataType::Date => &[
                "equals",
                "doesNotEqual",
                "before",
                "after",
                "today",
                "yesterday",
                "thisMonth",
                "lastMonth",
                "nextMonth",
                "thisYear",
                "lastYear",
                "nextYear",
                "empty",
                "notEmpty",
                "null",
                "notNull",
            ],
        }
    }
}
