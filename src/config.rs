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

//! # Ro Configuration Module
//!
//! JSON-driven construction of declarative state. Embedding layers (filter
//! dropdowns, header sort clicks, pager widgets) typically assemble state
//! as JSON; the factories here validate those values and produce the typed
//! state objects the engine consumes.
//!
//! ## Shapes
//!
//! Filtering expression:
//! ```json
//! {"field_name": "age", "data_type": "number",
//!  "condition": "greaterThan", "search_val": 18}
//! ```
//!
//! Expressions tree (an operand with an `"operator"` key nests):
//! ```json
//! {"operator": "and", "operands": [
//!     {"field_name": "name", "data_type": "string",
//!      "condition": "contains", "search_val": "ro"},
//!     {"operator": "or", "field_name": "age", "operands": [...]}
//! ]}
//! ```
//!
//! Full pipeline state:
//! ```json
//! {"filtering": {...tree...},
//!  "sorting": [{"field_name": "age", "dir": "desc"}],
//!  "paging": {"index": 0, "records_per_page": 25}}
//! ```
//!
//! Unknown condition names propagate [`RoError::Condition`]; every other
//! shape defect is an [`RoError::Validation`].

use serde_json::Value;

use crate::conditions::{operand_for, RoFilteringOperand};
use crate::data_util::RoDataState;
use crate::errors::{Result, RoError};
use crate::expressions::{
    RoFilteringExpression, RoFilteringExpressionsTree, RoFilteringLogic,
};
use crate::filtering::RoFilteringState;
use crate::paging::RoPagingState;
use crate::record::RoDataType;
use crate::sorting::{RoSortingDirection, RoSortingExpression, RoSortingState};

/// Builds one filtering expression from JSON configuration.
pub fn filtering_expression_from_config(config: &Value) -> Result<RoFilteringExpression> {
    let obj = config
        .as_object()
        .ok_or_else(|| RoError::validation("filtering expression config must be object"))?;

    let field_name = obj
        .get("field_name")
        .and_then(Value::as_str)
        .ok_or_else(|| RoError::validation("filtering expression requires string 'field_name'"))?;

    let data_type = obj
        .get("data_type")
        .and_then(Value::as_str)
        .ok_or_else(|| RoError::validation("filtering expression requires string 'data_type'"))?;

    let condition_name = obj
        .get("condition")
        .and_then(Value::as_str)
        .ok_or_else(|| RoError::validation("filtering expression requires string 'condition'"))?;

    let data_type = RoDataType::parse(data_type)?;
    let condition = operand_for(data_type).condition(condition_name)?;
    let search_val = obj.get("search_val").cloned();
    let ignore_case = obj
        .get("ignore_case")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    Ok(RoFilteringExpression::new(field_name, condition, search_val)
        .with_ignore_case(ignore_case))
}

/// Builds a filtering expressions tree from JSON configuration.
///
/// Operand objects carrying an `"operator"` key are parsed as nested trees,
/// everything else as atomic expressions.
pub fn filtering_tree_from_config(config: &Value) -> Result<RoFilteringExpressionsTree> {
    let obj = config
        .as_object()
        .ok_or_else(|| RoError::validation("expressions tree config must be object"))?;

    let operator = obj
        .get("operator")
        .and_then(Value::as_str)
        .ok_or_else(|| RoError::validation("expressions tree requires string 'operator'"))?;
    let operator = parse_logic(operator)?;

    let mut tree = match obj.get("field_name").and_then(Value::as_str) {
        Some(field_name) => RoFilteringExpressionsTree::for_field(operator, field_name),
        None => RoFilteringExpressionsTree::new(operator),
    };

    let operands = obj
        .get("operands")
        .and_then(Value::as_array)
        .ok_or_else(|| RoError::validation("expressions tree requires array 'operands'"))?;

    for operand in operands {
        let is_tree = operand
            .as_object()
            .map_or(false, |entry| entry.contains_key("operator"));
        if is_tree {
            tree.add_tree(filtering_tree_from_config(operand)?);
        } else {
            tree.add_expression(filtering_expression_from_config(operand)?);
        }
    }

    Ok(tree)
}

/// Builds one sorting expression from JSON configuration.
pub fn sorting_expression_from_config(config: &Value) -> Result<RoSortingExpression> {
    let obj = config
        .as_object()
        .ok_or_else(|| RoError::validation("sorting expression config must be object"))?;

    let field_name = obj
        .get("field_name")
        .and_then(Value::as_str)
        .ok_or_else(|| RoError::validation("sorting expression requires string 'field_name'"))?;

    let dir = obj
        .get("dir")
        .and_then(Value::as_str)
        .ok_or_else(|| RoError::validation("sorting expression requires string 'dir'"))?;
    let dir = match dir {
        "asc" => RoSortingDirection::Asc,
        "desc" => RoSortingDirection::Desc,
        other => {
            return Err(RoError::validation(format!(
                "unknown sorting direction '{other}' (expected 'asc' or 'desc')"
            )))
        }
    };

    let ignore_case = obj
        .get("ignore_case")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    Ok(RoSortingExpression::new(field_name, dir).with_ignore_case(ignore_case))
}

/// Builds a paging state from JSON configuration.
pub fn paging_state_from_config(config: &Value) -> Result<RoPagingState> {
    let obj = config
        .as_object()
        .ok_or_else(|| RoError::validation("paging config must be object"))?;

    let index = obj
        .get("index")
        .and_then(Value::as_i64)
        .ok_or_else(|| RoError::validation("paging requires integer 'index'"))?;

    let records_per_page = obj
        .get("records_per_page")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            RoError::validation("paging requires unsigned integer 'records_per_page'")
        })?;

    Ok(RoPagingState::new(index as isize, records_per_page as usize))
}

/// Builds a full pipeline state from JSON configuration.
///
/// Every key is optional; absent keys leave that stage unconfigured.
pub fn data_state_from_config(config: &Value) -> Result<RoDataState> {
    let obj = config
        .as_object()
        .ok_or_else(|| RoError::validation("data state config must be object"))?;

    let mut state = RoDataState::default();

    if let Some(filtering) = obj.get("filtering") {
        state.filtering = Some(RoFilteringState::new(filtering_tree_from_config(filtering)?));
    }

    if let Some(sorting) = obj.get("sorting") {
        let entries = sorting
            .as_array()
            .ok_or_else(|| RoError::validation("data state 'sorting' must be an array"))?;
        let expressions = entries
            .iter()
            .map(sorting_expression_from_config)
            .collect::<Result<Vec<_>>>()?;
        state.sorting = Some(RoSortingState::new(expressions));
    }

    if let Some(paging) = obj.get("paging") {
        state.paging = Some(paging_state_from_config(paging)?);
    }

    Ok(state)
}

fn parse_logic(name: &str) -> Result<RoFilteringLogic> {
    match name {
        "and" => Ok(RoFilteringLogic::And),
        "or" => Ok(RoFilteringLogic::Or),
        other => Err(RoError::validation(format!(
            "unknown filtering logic '{other}' (expected 'and' or 'or')"
        ))),
    }
}
