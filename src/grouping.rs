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

//! # Ro Grouping Module
//!
//! Grouping is built atop sorting: the sequence is fully sorted by the
//! grouping expressions, then partitioned into maximal runs of equal
//! leading-key values. Each run produces one [`RoGroupByRecord`]; with more
//! than one expression the runs nest, the first expression forming level 0
//! and each deeper level pointing at its parent group.
//!
//! ## Group identity
//!
//! Every row of the same contiguous group references the identical
//! `Arc<RoGroupByRecord>`, so "same group" is a pointer comparison
//! (`Arc::ptr_eq`). The `metadata` array of a [`RoGroupByResult`] parallels
//! `data` one-to-one, each entry being the deepest group its row belongs to.
//!
//! Run equality uses the same comparator as the sort, so a case-insensitive
//! expression groups case-insensitively; a group's `value` is the first-seen
//! raw value of its run.

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::{Result, RoError};
use crate::record::{RoRecord, RoRecordSet};
use crate::sorting::{
    compare_by_expression, RoDefaultSortingStrategy, RoSortingExpression, RoSortingStrategy,
};

/// Hard cap on the number of grouping expressions.
///
/// Exceeding it is a programmer error and fails with [`RoError::Grouping`].
pub const MAX_GROUPING_EXPRESSIONS: usize = 10;

/// Metadata describing one contiguous run of equal-key rows.
#[derive(Clone, Debug)]
pub struct RoGroupByRecord {
    /// Nesting depth; the first grouping expression produces level 0.
    pub level: usize,
    /// Field the group's expression reads.
    pub field_name: String,
    /// Key value shared by the run (first-seen raw value).
    pub value: Value,
    /// The data rows of the run.
    pub records: RoRecordSet,
    /// Enclosing group, absent at level 0.
    pub group_parent: Option<Arc<RoGroupByRecord>>,
}

/// A grouped sequence: sorted data plus a parallel group-metadata array.
#[derive(Clone, Debug, Default)]
pub struct RoGroupByResult {
    /// The fully sorted record sequence.
    pub data: RoRecordSet,
    /// Per-row deepest group, parallel 1:1 with `data`.
    pub metadata: Vec<Arc<RoGroupByRecord>>,
}

/// Partitions sorted sequences into hierarchical group-by records.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoGroupingStrategy;

impl RoGroupingStrategy {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoGroupingStrategy = RoGroupingStrategy;
        &INSTANCE
    }

    /// Sorts `data` by `expressions` and partitions it into groups.
    ///
    /// An empty expression list means grouping was not requested: the data
    /// comes back unchanged with empty metadata. More than
    /// [`MAX_GROUPING_EXPRESSIONS`] expressions fails.
    pub fn group_by(
        &self,
        data: &[RoRecord],
        expressions: &[RoSortingExpression],
    ) -> Result<RoGroupByResult> {
        if expressions.len() > MAX_GROUPING_EXPRESSIONS {
            return Err(RoError::grouping(format!(
                "grouping supports at most {MAX_GROUPING_EXPRESSIONS} expressions, got {}",
                expressions.len()
            )));
        }
        if expressions.is_empty() {
            return Ok(RoGroupByResult {
                data: data.to_vec(),
                metadata: Vec::new(),
            });
        }

        let sorted = RoDefaultSortingStrategy::instance().sort(data, expressions);
        let mut metadata = Vec::with_capacity(sorted.len());
        group_runs(&sorted, expressions, 0, None, &mut metadata);

        Ok(RoGroupByResult {
            data: sorted,
            metadata,
        })
    }
}

/// Walks one level of the sorted slice, emitting a group per maximal run
/// and recursing for the next expression.
fn group_runs(
    records: &[RoRecord],
    expressions: &[RoSortingExpression],
    level: usize,
    parent: Option<Arc<RoGroupByRecord>>,
    metadata: &mut Vec<Arc<RoGroupByRecord>>,
) {
    let expression = &expressions[level];
    let fallback = RoDefaultSortingStrategy::instance();
    let mut start = 0;
    while start < records.len() {
        let mut end = start + 1;
        while end < records.len()
            && compare_by_expression(&records[start], &records[end], expression, fallback)
                == Ordering::Equal
        {
            end += 1;
        }

        let group = Arc::new(RoGroupByRecord {
            level,
            field_name: expression.field_name.clone(),
            value: records[start]
                .get(expression.field_name.as_str())
                .cloned()
                .unwrap_or(Value::Null),
            records: records[start..end].to_vec(),
            group_parent: parent.clone(),
        });

        if level + 1 < expressions.len() {
            group_runs(
                &records[start..end],
                expressions,
                level + 1,
                Some(Arc::clone(&group)),
                metadata,
            );
        } else {
            for _ in start..end {
                metadata.push(Arc::clone(&group));
            }
        }
        start = end;
    }
}
