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

//! # Ro Expression Module
//!
//! This module defines the declarative filtering expression model: atomic
//! predicates bound to one field and one named condition, and the recursive
//! AND/OR tree that combines them.
//!
//! ## Tree Shape
//!
//! A tree node carries a logic operator and a list of operands; each operand
//! is either a single [`RoFilteringExpression`] or a nested
//! [`RoFilteringExpressionsTree`]. Nested trees apply their own operator
//! first and contribute one boolean to the parent. A tree may be tagged with
//! the field it was built for, which enables [`find`] lookups across nested
//! sub-trees.
//!
//! An empty tree means "no filtering" and matches every record.
//!
//! [`find`]: RoFilteringExpressionsTree::find

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conditions::RoFilteringOperation;

/// Logic operator combining the operands of one tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoFilteringLogic {
    /// Every operand must match.
    And,
    /// At least one operand must match.
    Or,
}

/// An atomic filtering predicate: one field, one named condition, and an
/// optional search value.
///
/// `ignore_case` applies to string comparisons and defaults to `true`; the
/// flag is carried even for non-string conditions, which ignore it.
#[derive(Clone, Debug)]
pub struct RoFilteringExpression {
    /// Name of the record field the predicate reads.
    pub field_name: String,
    /// The condition applied to the field value.
    pub condition: RoFilteringOperation,
    /// Comparison operand for binary conditions; unary conditions ignore it.
    pub search_val: Option<Value>,
    /// Lower-case both sides of string comparisons.
    pub ignore_case: bool,
}

impl RoFilteringExpression {
    /// Constructs an expression with the default case-insensitive behavior.
    pub fn new(
        field_name: impl Into<String>,
        condition: RoFilteringOperation,
        search_val: impl Into<Option<Value>>,
    ) -> Self {
        RoFilteringExpression {
            field_name: field_name.into(),
            condition,
            search_val: search_val.into(),
            ignore_case: true,
        }
    }

    /// Overrides the case sensitivity of string comparisons.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// One operand of an expressions tree: a single expression or a nested tree.
#[derive(Clone, Debug)]
pub enum RoExpressionOperand {
    /// An atomic predicate.
    Expression(RoFilteringExpression),
    /// A nested sub-tree evaluated with its own operator.
    Tree(RoFilteringExpressionsTree),
}

/// A recursive AND/OR combination of filtering expressions and sub-trees.
#[derive(Clone, Debug, Default)]
pub struct RoFilteringExpressionsTree {
    /// Operator combining the direct operands of this node.
    pub operator: RoFilteringLogic,
    /// Field this sub-tree was built for, when it models one column's filter.
    pub field_name: Option<String>,
    /// The direct operands of this node.
    pub filtering_operands: Vec<RoExpressionOperand>,
}

impl Default for RoFilteringLogic {
    fn default() -> Self {
        RoFilteringLogic::And
    }
}

impl RoFilteringExpressionsTree {
    /// Constructs an empty tree with the given operator.
    pub fn new(operator: RoFilteringLogic) -> Self {
        RoFilteringExpressionsTree {
            operator,
            field_name: None,
            filtering_operands: Vec::new(),
        }
    }

    /// Constructs an empty tree tagged with the field it filters.
    pub fn for_field(operator: RoFilteringLogic, field_name: impl Into<String>) -> Self {
        RoFilteringExpressionsTree {
            operator,
            field_name: Some(field_name.into()),
            filtering_operands: Vec::new(),
        }
    }

    /// Appends an atomic expression operand.
    pub fn add_expression(&mut self, expression: RoFilteringExpression) -> &mut Self {
        self.filtering_operands
            .push(RoExpressionOperand::Expression(expression));
        self
    }

    /// Appends a nested sub-tree operand.
    pub fn add_tree(&mut self, tree: RoFilteringExpressionsTree) -> &mut Self {
        self.filtering_operands.push(RoExpressionOperand::Tree(tree));
        self
    }

    /// An empty tree expresses "no filtering" and matches everything.
    pub fn is_empty(&self) -> bool {
        self.filtering_operands.is_empty()
    }

    /// Looks up the operand built for a field, descending into nested
    /// sub-trees.
    ///
    /// A sub-tree matches through its `field_name` tag; an expression matches
    /// through the field it reads. The first match in operand order wins.
    pub fn find(&self, field_name: &str) -> Option<&RoExpressionOperand> {
        for operand in &self.filtering_operands {
            match operand {
                RoExpressionOperand::Expression(expression) => {
                    if expression.field_name == field_name {
                        return Some(operand);
                    }
                }
                RoExpressionOperand::Tree(tree) => {
                    if tree.field_name.as_deref() == Some(field_name) {
                        return Some(operand);
                    }
                    if let Some(found) = tree.find(field_name) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }
}
