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

//! # Ro Paging Module
//!
//! Slices a sequence into one page and reports page metadata. The pager
//! never fails: invalid requests come back as error codes in the metadata
//! with the input sequence returned unchanged, so downstream rendering
//! degrades gracefully instead of crashing.
//!
//! Paging is generic over the element type so group metadata arrays can be
//! paged alongside their data rows with the same arithmetic.

use serde::{Deserialize, Serialize};

/// Validation outcome of a paging request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoPagingError {
    /// The request was valid.
    None,
    /// The page index was negative or past the last page.
    IncorrectPageIndex,
    /// The records-per-page count was not positive.
    IncorrectRecordsPerPage,
}

/// Computed page metadata; an output of every paging call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoPagingMetadata {
    /// Total page count for the paged sequence.
    pub count_pages: usize,
    /// Length of the sequence before slicing.
    pub count_records: usize,
    /// Validation outcome of the request.
    pub error: RoPagingError,
}

/// Declarative paging configuration.
///
/// `metadata` is output-only: the facade writes the result of the last
/// paging call back into it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoPagingState {
    /// Zero-based page index. Signed, so an out-of-range negative request
    /// is representable and reported rather than unrepresentable.
    pub index: isize,
    /// Page size; must be positive.
    pub records_per_page: usize,
    /// Metadata of the last paging call, absent until one runs.
    pub metadata: Option<RoPagingMetadata>,
}

impl RoPagingState {
    /// Constructs a paging request with no metadata yet.
    pub fn new(index: isize, records_per_page: usize) -> Self {
        RoPagingState {
            index,
            records_per_page,
            metadata: None,
        }
    }
}

/// One page of a sequence plus the metadata describing the request.
#[derive(Clone, Debug)]
pub struct RoPagedResult<T> {
    /// The page slice, or the input unchanged on a rejected request.
    pub data: Vec<T>,
    /// Computed page metadata.
    pub metadata: RoPagingMetadata,
}

/// Slices sequences into pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoPager;

impl RoPager {
    /// Pages a sequence according to `state`.
    ///
    /// `records_per_page` is validated first, then the index against
    /// `count_pages = ceil(len / records_per_page)`; note that paging an
    /// empty sequence has zero pages, so every index is out of range. On
    /// either rejection the input comes back unchanged with the error code
    /// in the metadata.
    pub fn page<T: Clone>(data: &[T], state: &RoPagingState) -> RoPagedResult<T> {
        let count_records = data.len();

        if state.records_per_page == 0 {
            return RoPagedResult {
                data: data.to_vec(),
                metadata: RoPagingMetadata {
                    count_pages: 0,
                    count_records,
                    error: RoPagingError::IncorrectRecordsPerPage,
                },
            };
        }

        let count_pages = count_records.div_ceil(state.records_per_page);
        if state.index < 0 || state.index as usize >= count_pages {
            return RoPagedResult {
                data: data.to_vec(),
                metadata: RoPagingMetadata {
                    count_pages,
                    count_records,
                    error: RoPagingError::IncorrectPageIndex,
                },
            };
        }

        let start = state.index as usize * state.records_per_page;
        let end = usize::min(start + state.records_per_page, count_records);
        RoPagedResult {
            data: data[start..end].to_vec(),
            metadata: RoPagingMetadata {
                count_pages,
                count_records,
                error: RoPagingError::None,
            },
        }
    }
}
