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

//! # Ro Filtering Strategy Module
//!
//! This module evaluates expression trees against record sequences. The
//! [`RoFilteringStrategy`] trait ships provided implementations for every
//! operation, so a custom strategy only overrides what it needs — typically
//! `filter` — and inherits record matching unchanged. This is the filtering
//! plugin seam of the engine.
//!
//! ## Matching
//!
//! - Unary conditions evaluate the field value alone; binary conditions
//!   receive the expression's search value.
//! - `And` nodes require every operand to match, `Or` nodes at least one;
//!   nested sub-trees apply their own operator first.
//! - A record missing the referenced field is evaluated with a missing
//!   value, never an error.
//!
//! ## Filtering
//!
//! `filter` preserves the relative input order of matching records and
//! returns the input unchanged for an empty tree. With the `parallel`
//! feature the scan fans out with Rayon while keeping the output order.

use std::fmt;

use crate::expressions::{
    RoExpressionOperand, RoFilteringExpression, RoFilteringExpressionsTree, RoFilteringLogic,
};
use crate::record::{RoRecord, RoRecordSet};

/// Contract for evaluating filtering expression trees over records.
///
/// All operations have provided implementations; implementors override
/// selectively. Strategies must be thread-safe so the parallel scan can
/// share them across workers.
pub trait RoFilteringStrategy: fmt::Debug + Send + Sync {
    /// Evaluates one expression against one record.
    ///
    /// The record's field resolves to a missing value when absent. The
    /// `_index` of the expression within its operand list is reserved for
    /// strategies that keep per-expression state; the default evaluation
    /// ignores it.
    fn find_match(
        &self,
        record: &RoRecord,
        expression: &RoFilteringExpression,
        _index: usize,
    ) -> bool {
        let value = record.get(expression.field_name.as_str());
        (expression.condition.logic)(value, expression.search_val.as_ref(), expression.ignore_case)
    }

    /// Evaluates a flat expression list combined with one logic operator.
    fn match_record_by_expressions(
        &self,
        record: &RoRecord,
        expressions: &[RoFilteringExpression],
        operator: RoFilteringLogic,
    ) -> bool {
        match operator {
            RoFilteringLogic::And => expressions
                .iter()
                .enumerate()
                .all(|(index, expression)| self.find_match(record, expression, index)),
            RoFilteringLogic::Or => expressions
                .iter()
                .enumerate()
                .any(|(index, expression)| self.find_match(record, expression, index)),
        }
    }

    /// Evaluates a full expressions tree against one record.
    ///
    /// An empty tree matches everything.
    fn match_record(&self, record: &RoRecord, tree: &RoFilteringExpressionsTree) -> bool {
        if tree.is_empty() {
            return true;
        }
        let matches = |(index, operand): (usize, &RoExpressionOperand)| match operand {
            RoExpressionOperand::Expression(expression) => {
                self.find_match(record, expression, index)
            }
            RoExpressionOperand::Tree(subtree) => self.match_record(record, subtree),
        };
        match tree.operator {
            RoFilteringLogic::And => tree.filtering_operands.iter().enumerate().all(matches),
            RoFilteringLogic::Or => tree.filtering_operands.iter().enumerate().any(matches),
        }
    }

    /// Returns the records matching the tree, in their input order.
    ///
    /// An empty tree returns the input unchanged.
    fn filter(&self, data: &[RoRecord], tree: &RoFilteringExpressionsTree) -> RoRecordSet {
        if tree.is_empty() {
            return data.to_vec();
        }
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return data
                .par_iter()
                .filter(|record| self.match_record(record, tree))
                .cloned()
                .collect();
        }
        #[cfg(not(feature = "parallel"))]
        {
            data.iter()
                .filter(|record| self.match_record(record, tree))
                .cloned()
                .collect()
        }
    }
}

/// The stock filtering strategy with no overrides.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoDefaultFilteringStrategy;

impl RoDefaultFilteringStrategy {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoDefaultFilteringStrategy = RoDefaultFilteringStrategy;
        &INSTANCE
    }
}

impl RoFilteringStrategy for RoDefaultFilteringStrategy {}

/// Declarative filtering configuration: the expressions tree plus an
/// optional custom strategy.
#[derive(Debug)]
pub struct RoFilteringState {
    /// The tree evaluated against each record.
    pub expressions_tree: RoFilteringExpressionsTree,
    /// Custom evaluation strategy; the default strategy applies when absent.
    pub strategy: Option<Box<dyn RoFilteringStrategy>>,
}

impl RoFilteringState {
    /// Constructs a state evaluated with the default strategy.
    pub fn new(expressions_tree: RoFilteringExpressionsTree) -> Self {
        RoFilteringState {
            expressions_tree,
            strategy: None,
        }
    }

    /// Injects a custom filtering strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn RoFilteringStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }
}
