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

//! # Ro Data Container Module
//!
//! The stateful facade pairing a raw record sequence with its declarative
//! query state and the memoized transformed view.
//!
//! ## Explicit-refresh model
//!
//! There is no dirty tracking and no reactive dependency graph. Callers
//! mutate `data` or `state`, then call [`process`]/[`process_with`] to
//! recompute `transformed_data`; until then the transformed view is stale
//! by design. CRUD helpers mutate only the raw sequence and never trigger a
//! recompute — this lets embedders inspect the raw and transformed views
//! independently mid-mutation.
//!
//! ## Index semantics
//!
//! Lookups resolve against the raw sequence or the last-computed
//! transformed view, selected by the explicit [`RoDataAccess`] argument.
//! The caller must know which view an index refers to; there is no
//! auto-detection.
//!
//! [`process`]: RoDataContainer::process
//! [`process_with`]: RoDataContainer::process_with

use serde_json::Value;

use crate::data_util::{RoDataState, RoDataUtil};
use crate::record::{RoRecord, RoRecordSet};

/// Selects which sequence a container lookup resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoDataAccess {
    /// The raw source-of-truth sequence.
    RawData,
    /// The last-computed transformed view.
    TransformedData,
}

/// Result of a key-value record lookup.
#[derive(Clone, Copy, Debug)]
pub struct RoRecordInfo<'a> {
    /// Position of the first match in the raw sequence, if any.
    pub index: Option<usize>,
    /// The matched record, if any.
    pub record: Option<&'a RoRecord>,
}

/// Stateful holder of raw data, query state, and the cached transformed
/// view.
#[derive(Debug, Default)]
pub struct RoDataContainer {
    /// The raw source-of-truth sequence; CRUD helpers mutate it in place.
    pub data: RoRecordSet,
    /// The derived view produced by the last [`process`] call.
    ///
    /// [`process`]: RoDataContainer::process
    pub transformed_data: RoRecordSet,
    /// The current declarative query configuration.
    pub state: RoDataState,
}

impl RoDataContainer {
    /// Constructs a container around an initial raw sequence.
    ///
    /// The transformed view starts as a copy of the raw data and the state
    /// starts empty (no filtering, sorting, or paging).
    pub fn new(data: RoRecordSet) -> Self {
        RoDataContainer {
            transformed_data: data.clone(),
            data,
            state: RoDataState::default(),
        }
    }

    /// Recomputes the transformed view from the current data and state.
    pub fn process(&mut self) -> &RoRecordSet {
        self.transformed_data = RoDataUtil::process(&self.data, &mut self.state);
        &self.transformed_data
    }

    /// Merges the present keys of `state` into the current state, then
    /// recomputes the transformed view.
    ///
    /// The merge is shallow per key: a present `filtering`/`sorting`/
    /// `paging` replaces that sub-state entirely; absent keys keep the
    /// current configuration.
    pub fn process_with(&mut self, state: RoDataState) -> &RoRecordSet {
        if state.filtering.is_some() {
            self.state.filtering = state.filtering;
        }
        if state.sorting.is_some() {
            self.state.sorting = state.sorting;
        }
        if state.paging.is_some() {
            self.state.paging = state.paging;
        }
        self.process()
    }

    /// Inserts a record into the raw sequence.
    ///
    /// Appends by default; an explicit index is clamped to the sequence
    /// length. The transformed view is untouched until the next process.
    pub fn add_record(&mut self, record: RoRecord, index: Option<usize>) {
        match index {
            Some(position) => {
                let position = usize::min(position, self.data.len());
                self.data.insert(position, record);
            }
            None => self.data.push(record),
        }
    }

    /// Removes the first record equal to `record` from the raw sequence.
    pub fn delete_record(&mut self, record: &RoRecord) -> bool {
        match self.data.iter().position(|candidate| candidate == record) {
            Some(position) => {
                self.data.remove(position);
                true
            }
            None => false,
        }
    }

    /// Removes the record at `index` from the raw sequence.
    pub fn delete_record_by_index(&mut self, index: usize) -> bool {
        if index < self.data.len() {
            self.data.remove(index);
            true
        } else {
            false
        }
    }

    /// Shallow-merges `new_values` into the record at `index`.
    ///
    /// Fields present in `new_values` overwrite the record's fields; all
    /// others are untouched. The record keeps its position and identity.
    pub fn update_record_by_index(&mut self, index: usize, new_values: &RoRecord) -> bool {
        match self.data.get_mut(index) {
            Some(record) => {
                for (field, value) in new_values {
                    record.insert(field.clone(), value.clone());
                }
                true
            }
            None => false,
        }
    }

    /// Linear scan of the raw sequence for the first record whose field
    /// equals `value`.
    pub fn get_record_info_by_key_value(&self, field_name: &str, value: &Value) -> RoRecordInfo<'_> {
        let index = self
            .data
            .iter()
            .position(|record| record.get(field_name) == Some(value));
        RoRecordInfo {
            index,
            record: index.map(|position| &self.data[position]),
        }
    }

    /// Position of the first record equal to `record` in the selected view.
    pub fn get_index_of_record(&self, record: &RoRecord, access: RoDataAccess) -> Option<usize> {
        self.view(access)
            .iter()
            .position(|candidate| candidate == record)
    }

    /// The record at `index` in the selected view.
    pub fn get_record_by_index(&self, index: usize, access: RoDataAccess) -> Option<&RoRecord> {
        self.view(access).get(index)
    }

    fn view(&self, access: RoDataAccess) -> &RoRecordSet {
        match access {
            RoDataAccess::RawData => &self.data,
            RoDataAccess::TransformedData => &self.transformed_data,
        }
    }
}
