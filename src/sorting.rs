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

//! # Ro Sorting Strategy Module
//!
//! Stable multi-key sorting over record sequences. An ordered expression
//! list defines primary/secondary/... keys, evaluated left to right; the
//! first non-equal comparison decides a pair's order, `Desc` reverses it,
//! and `ignore_case` lower-cases string operands immediately before
//! comparison.
//!
//! ## Stability
//!
//! Equal elements retain their relative input order. This is an explicit
//! guarantee, and neither implementation relies on the standard sort
//! primitive being stable:
//!
//! - [`RoDefaultSortingStrategy`] runs an explicit bottom-up merge sort,
//!   stable by algorithm.
//! - [`RoStableSortingStrategy`] decorates records with their input
//!   position and feeds the unstable primitive a comparator whose final
//!   tie-break is that position, pinning a deterministic order across
//!   repeated sorts.
//!
//! ## Value ordering
//!
//! The pinned total order of [`RoSortingStrategy::compare_values`]: null
//! and missing values are mutually equal and sort before any defined value
//! (nulls first ascending); numbers compare as `f64`; strings that both
//! parse as dates compare chronologically, otherwise lexicographically;
//! booleans order false before true; remaining mixed pairs fall back to a
//! fixed type rank.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conditions::parse_date_text;
use crate::record::{RoRecord, RoRecordSet};

/// Direction of one sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoSortingDirection {
    /// Smallest values first.
    Asc,
    /// Largest values first.
    Desc,
}

/// One sort key: field, direction, case sensitivity, and an optional
/// per-key comparator strategy.
#[derive(Clone, Debug)]
pub struct RoSortingExpression {
    /// Name of the record field this key reads.
    pub field_name: String,
    /// Sort direction of this key.
    pub dir: RoSortingDirection,
    /// Lower-case string operands before comparing; defaults to `true`.
    pub ignore_case: bool,
    /// Custom comparator for this key; the driving strategy's
    /// `compare_values` applies when absent.
    pub strategy: Option<Arc<dyn RoSortingStrategy>>,
}

impl RoSortingExpression {
    /// Constructs a sort key with the default case-insensitive behavior.
    pub fn new(field_name: impl Into<String>, dir: RoSortingDirection) -> Self {
        RoSortingExpression {
            field_name: field_name.into(),
            dir,
            ignore_case: true,
            strategy: None,
        }
    }

    /// Overrides the case sensitivity of string comparisons.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Injects a custom comparator for this key.
    pub fn with_strategy(mut self, strategy: Arc<dyn RoSortingStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }
}

/// Contract for ordering record sequences by a list of sort keys.
///
/// `compare_values` ships the pinned default ordering; implementors
/// override it to change how individual values compare, or `sort` to change
/// the sorting mechanics.
pub trait RoSortingStrategy: fmt::Debug + Send + Sync {
    /// Compares two field values under the pinned total order.
    fn compare_values(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        default_compare_values(a, b)
    }

    /// Returns a new sequence ordered by the expressions, left to right.
    ///
    /// Must be stable: records comparing equal under every expression keep
    /// their relative input order.
    fn sort(&self, data: &[RoRecord], expressions: &[RoSortingExpression]) -> RoRecordSet;
}

/// Stock strategy: an explicit bottom-up merge sort, stable by algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoDefaultSortingStrategy;

impl RoDefaultSortingStrategy {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoDefaultSortingStrategy = RoDefaultSortingStrategy;
        &INSTANCE
    }
}

impl RoSortingStrategy for RoDefaultSortingStrategy {
    fn sort(&self, data: &[RoRecord], expressions: &[RoSortingExpression]) -> RoRecordSet {
        let mut records = data.to_vec();
        if expressions.is_empty() {
            return records;
        }
        merge_sort_by(&mut records, |a, b| {
            compare_records(a, b, expressions, self)
        });
        records
    }
}

/// Index-tagged strategy: decorates records with their input position and
/// uses that position as the final tie-break over the unstable primitive,
/// so repeated sorts of equal-key records are deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoStableSortingStrategy;

impl RoStableSortingStrategy {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoStableSortingStrategy = RoStableSortingStrategy;
        &INSTANCE
    }
}

impl RoSortingStrategy for RoStableSortingStrategy {
    fn sort(&self, data: &[RoRecord], expressions: &[RoSortingExpression]) -> RoRecordSet {
        if expressions.is_empty() {
            return data.to_vec();
        }
        let mut tagged: Vec<(usize, RoRecord)> = data.iter().cloned().enumerate().collect();
        tagged.sort_unstable_by(|(left_pos, left), (right_pos, right)| {
            compare_records(left, right, expressions, self).then(left_pos.cmp(right_pos))
        });
        tagged.into_iter().map(|(_, record)| record).collect()
    }
}

/// Declarative sorting configuration: the key list plus an optional custom
/// driving strategy.
#[derive(Debug)]
pub struct RoSortingState {
    /// The sort keys, primary first.
    pub expressions: Vec<RoSortingExpression>,
    /// Custom driving strategy; the default strategy applies when absent.
    pub strategy: Option<Box<dyn RoSortingStrategy>>,
}

impl RoSortingState {
    /// Constructs a state driven by the default strategy.
    pub fn new(expressions: Vec<RoSortingExpression>) -> Self {
        RoSortingState {
            expressions,
            strategy: None,
        }
    }

    /// Injects a custom sorting strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn RoSortingStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }
}

/// Compares two records over an expression list, left to right.
///
/// The first key yielding a non-equal ordering decides; `fallback` supplies
/// `compare_values` for keys without their own strategy.
pub fn compare_records(
    a: &RoRecord,
    b: &RoRecord,
    expressions: &[RoSortingExpression],
    fallback: &dyn RoSortingStrategy,
) -> Ordering {
    for expression in expressions {
        let ordering = compare_by_expression(a, b, expression, fallback);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Compares two records under a single sort key.
pub fn compare_by_expression(
    a: &RoRecord,
    b: &RoRecord,
    expression: &RoSortingExpression,
    fallback: &dyn RoSortingStrategy,
) -> Ordering {
    let strategy = expression.strategy.as_deref().unwrap_or(fallback);
    let left = a.get(expression.field_name.as_str());
    let right = b.get(expression.field_name.as_str());
    let ordering = if expression.ignore_case {
        let left_folded = fold_case_value(left);
        let right_folded = fold_case_value(right);
        strategy.compare_values(left_folded.as_ref().or(left), right_folded.as_ref().or(right))
    } else {
        strategy.compare_values(left, right)
    };
    match expression.dir {
        RoSortingDirection::Asc => ordering,
        RoSortingDirection::Desc => ordering.reverse(),
    }
}

/// The pinned default value ordering; see the module docs.
pub fn default_compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(left), Some(right)) => compare_defined(left, right),
    }
}

fn compare_defined(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => match (parse_date_text(a), parse_date_text(b)) {
            (Some(first), Some(second)) => first.cmp(&second),
            _ => a.cmp(b),
        },
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => type_rank(left).cmp(&type_rank(right)),
    }
}

// Deterministic cross-type ordering for heterogeneous columns.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn fold_case_value(value: Option<&Value>) -> Option<Value> {
    match value {
        Some(Value::String(text)) => Some(Value::String(text.to_lowercase())),
        _ => None,
    }
}

fn merge_sort_by<T, F>(items: &mut [T], compare: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mut buffer = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let middle = usize::min(start + width, len);
            let end = usize::min(start + 2 * width, len);
            merge_runs(
                &items[start..middle],
                &items[middle..end],
                &mut buffer[start..end],
                &compare,
            );
            start = end;
        }
        items.clone_from_slice(&buffer);
        width *= 2;
    }
}

fn merge_runs<T, F>(left: &[T], right: &[T], out: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut i = 0;
    let mut j = 0;
    for slot in out.iter_mut() {
        // Take from the right run only on a strictly smaller key; ties keep
        // the left run first, which is what makes the merge stable.
        let take_right =
            i >= left.len() || (j < right.len() && compare(&right[j], &left[i]) == Ordering::Less);
        if take_right {
            *slot = right[j].clone();
            j += 1;
        } else {
            *slot = left[i].clone();
            i += 1;
        }
    }
}
