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

//! # Ro Condition Module
//!
//! This module owns the fixed catalog of named filtering conditions per
//! abstract data type and their matching logic. Each catalog is exposed as a
//! process-wide singleton operand (`instance()`), and conditions are looked
//! up by name; an unknown name is a programmer error and fails with
//! [`RoError::Condition`].
//!
//! ## Condition Evaluation
//!
//! A condition receives the record's field value (or nothing when the field
//! is missing), the optional search value, and the ignore-case flag. Unary
//! conditions ignore the search value. Evaluation is pure; the only
//! deliberate impurity is the family of relative date conditions (`today`,
//! `thisMonth`, ...), which read local "now" at evaluation time, so results
//! may change across a day boundary.
//!
//! ## Null versus missing
//!
//! `null` matches only an explicit JSON null; a missing field is *not* null,
//! while `empty` covers both. The `notNull`/`notEmpty` variants are the
//! strict negations. All other conditions treat missing data as
//! non-matching, except the inequality conditions (`doesNotEqual`), which
//! match records that do not carry a comparable value.
//!
//! ## Dates
//!
//! Date fields carry ISO-8601 strings (RFC 3339, naive date-time, or plain
//! date). Values that fail to parse are treated as missing data rather than
//! errors. Day-level conditions (`equals`, `today`, ...) compare calendar
//! parts; `before`/`after` compare full instants.

use std::fmt;

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

use crate::errors::{Result, RoError};
use crate::record::RoDataType;

/// Signature of a condition's matching logic.
///
/// Arguments are the record's field value (`None` when the field is
/// missing), the search value, and the ignore-case flag. Unary conditions
/// ignore the search value; non-string conditions ignore the flag.
pub type RoConditionLogic = fn(Option<&Value>, Option<&Value>, bool) -> bool;

/// One named filtering condition.
#[derive(Clone, Copy)]
pub struct RoFilteringOperation {
    /// Catalog name of the condition, e.g. `"contains"`.
    pub name: &'static str,
    /// Unary conditions evaluate the field value alone.
    pub is_unary: bool,
    /// The matching predicate.
    pub logic: RoConditionLogic,
}

impl fmt::Debug for RoFilteringOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoFilteringOperation")
            .field("name", &self.name)
            .field("is_unary", &self.is_unary)
            .finish()
    }
}

impl PartialEq for RoFilteringOperation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.is_unary == other.is_unary
    }
}

/// Contract every per-type condition catalog fulfills.
///
/// Catalogs are singletons; callers fetch them through `instance()` on the
/// concrete operand type or through [`operand_for`].
pub trait RoFilteringOperand {
    /// The full, ordered condition catalog of this operand.
    fn operations(&self) -> &'static [RoFilteringOperation];

    /// Returns the condition with the given name.
    ///
    /// Unknown names are programmer errors and fail with
    /// [`RoError::Condition`].
    fn condition(&self, name: &str) -> Result<RoFilteringOperation> {
        self.operations()
            .iter()
            .find(|operation| operation.name == name)
            .copied()
            .ok_or_else(|| RoError::condition(name))
    }

    /// Returns the names of all conditions in catalog order.
    fn condition_list(&self) -> Vec<&'static str> {
        self.operations()
            .iter()
            .map(|operation| operation.name)
            .collect()
    }
}

/// Returns the condition catalog for a declared data type.
pub fn operand_for(data_type: RoDataType) -> &'static dyn RoFilteringOperand {
    match data_type {
        RoDataType::String => RoStringFilteringOperand::instance(),
        RoDataType::Number => RoNumberFilteringOperand::instance(),
        RoDataType::Boolean => RoBooleanFilteringOperand::instance(),
        RoDataType::Date => RoDateFilteringOperand::instance(),
    }
}

/// Condition catalog for string fields.
///
/// String conditions compare on the string projection of the value; null
/// and missing values project to the empty string. The ignore-case flag
/// lower-cases both sides immediately before comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoStringFilteringOperand;

impl RoStringFilteringOperand {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoStringFilteringOperand = RoStringFilteringOperand;
        &INSTANCE
    }
}

impl RoFilteringOperand for RoStringFilteringOperand {
    fn operations(&self) -> &'static [RoFilteringOperation] {
        STRING_OPERATIONS
    }
}

/// Condition catalog for numeric fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoNumberFilteringOperand;

impl RoNumberFilteringOperand {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoNumberFilteringOperand = RoNumberFilteringOperand;
        &INSTANCE
    }
}

impl RoFilteringOperand for RoNumberFilteringOperand {
    fn operations(&self) -> &'static [RoFilteringOperation] {
        NUMBER_OPERATIONS
    }
}

/// Condition catalog for boolean fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoBooleanFilteringOperand;

impl RoBooleanFilteringOperand {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoBooleanFilteringOperand = RoBooleanFilteringOperand;
        &INSTANCE
    }
}

impl RoFilteringOperand for RoBooleanFilteringOperand {
    fn operations(&self) -> &'static [RoFilteringOperation] {
        BOOLEAN_OPERATIONS
    }
}

/// Condition catalog for date fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoDateFilteringOperand;

impl RoDateFilteringOperand {
    /// Returns the process-wide singleton.
    pub fn instance() -> &'static Self {
        static INSTANCE: RoDateFilteringOperand = RoDateFilteringOperand;
        &INSTANCE
    }
}

impl RoFilteringOperand for RoDateFilteringOperand {
    fn operations(&self) -> &'static [RoFilteringOperation] {
        DATE_OPERATIONS
    }
}

static STRING_OPERATIONS: &[RoFilteringOperation] = &[
    RoFilteringOperation {
        name: "contains",
        is_unary: false,
        logic: string_contains,
    },
    RoFilteringOperation {
        name: "doesNotContain",
        is_unary: false,
        logic: string_does_not_contain,
    },
    RoFilteringOperation {
        name: "startsWith",
        is_unary: false,
        logic: string_starts_with,
    },
    RoFilteringOperation {
        name: "endsWith",
        is_unary: false,
        logic: string_ends_with,
    },
    RoFilteringOperation {
        name: "equals",
        is_unary: false,
        logic: string_equals,
    },
    RoFilteringOperation {
        name: "doesNotEqual",
        is_unary: false,
        logic: string_does_not_equal,
    },
    RoFilteringOperation {
        name: "empty",
        is_unary: true,
        logic: string_empty,
    },
    RoFilteringOperation {
        name: "notEmpty",
        is_unary: true,
        logic: string_not_empty,
    },
    RoFilteringOperation {
        name: "null",
        is_unary: true,
        logic: value_null,
    },
    RoFilteringOperation {
        name: "notNull",
        is_unary: true,
        logic: value_not_null,
    },
];

static NUMBER_OPERATIONS: &[RoFilteringOperation] = &[
    RoFilteringOperation {
        name: "equals",
        is_unary: false,
        logic: number_equals,
    },
    RoFilteringOperation {
        name: "doesNotEqual",
        is_unary: false,
        logic: number_does_not_equal,
    },
    RoFilteringOperation {
        name: "greaterThan",
        is_unary: false,
        logic: number_greater_than,
    },
    RoFilteringOperation {
        name: "lessThan",
        is_unary: false,
        logic: number_less_than,
    },
    RoFilteringOperation {
        name: "greaterThanOrEqualTo",
        is_unary: false,
        logic: number_greater_than_or_equal,
    },
    RoFilteringOperation {
        name: "lessThanOrEqualTo",
        is_unary: false,
        logic: number_less_than_or_equal,
    },
    RoFilteringOperation {
        name: "empty",
        is_unary: true,
        logic: number_empty,
    },
    RoFilteringOperation {
        name: "notEmpty",
        is_unary: true,
        logic: number_not_empty,
    },
    RoFilteringOperation {
        name: "null",
        is_unary: true,
        logic: value_null,
    },
    RoFilteringOperation {
        name: "notNull",
        is_unary: true,
        logic: value_not_null,
    },
];

static BOOLEAN_OPERATIONS: &[RoFilteringOperation] = &[
    RoFilteringOperation {
        name: "all",
        is_unary: true,
        logic: boolean_all,
    },
    RoFilteringOperation {
        name: "true",
        is_unary: true,
        logic: boolean_true,
    },
    RoFilteringOperation {
        name: "false",
        is_unary: true,
        logic: boolean_false,
    },
    RoFilteringOperation {
        name: "empty",
        is_unary: true,
        logic: boolean_empty,
    },
    RoFilteringOperation {
        name: "notEmpty",
        is_unary: true,
        logic: boolean_not_empty,
    },
    RoFilteringOperation {
        name: "null",
        is_unary: true,
        logic: value_null,
    },
    RoFilteringOperation {
        name: "notNull",
        is_unary: true,
        logic: value_not_null,
    },
];

static DATE_OPERATIONS: &[RoFilteringOperation] = &[
    RoFilteringOperation {
        name: "equals",
        is_unary: false,
        logic: date_equals,
    },
    RoFilteringOperation {
        name: "doesNotEqual",
        is_unary: false,
        logic: date_does_not_equal,
    },
    RoFilteringOperation {
        name: "before",
        is_unary: false,
        logic: date_before,
    },
    RoFilteringOperation {
        name: "after",
        is_unary: false,
        logic: date_after,
    },
    RoFilteringOperation {
        name: "today",
        is_unary: true,
        logic: date_today,
    },
    RoFilteringOperation {
        name: "yesterday",
        is_unary: true,
        logic: date_yesterday,
    },
    RoFilteringOperation {
        name: "thisMonth",
        is_unary: true,
        logic: date_this_month,
    },
    RoFilteringOperation {
        name: "lastMonth",
        is_unary: true,
        logic: date_last_month,
    },
    RoFilteringOperation {
        name: "nextMonth",
        is_unary: true,
        logic: date_next_month,
    },
    RoFilteringOperation {
        name: "thisYear",
        is_unary: true,
        logic: date_this_year,
    },
    RoFilteringOperation {
        name: "lastYear",
        is_unary: true,
        logic: date_last_year,
    },
    RoFilteringOperation {
        name: "nextYear",
        is_unary: true,
        logic: date_next_year,
    },
    RoFilteringOperation {
        name: "empty",
        is_unary: true,
        logic: date_empty,
    },
    RoFilteringOperation {
        name: "notEmpty",
        is_unary: true,
        logic: date_not_empty,
    },
    RoFilteringOperation {
        name: "null",
        is_unary: true,
        logic: value_null,
    },
    RoFilteringOperation {
        name: "notNull",
        is_unary: true,
        logic: value_not_null,
    },
];

/// Projects a value onto a string; null and missing project to "".
fn text_projection(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => other.to_string(),
    }
}

fn fold_case(text: String, ignore_case: bool) -> String {
    if ignore_case {
        text.to_lowercase()
    } else {
        text
    }
}

fn string_pair(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> (String, String) {
    (
        fold_case(text_projection(value), ignore_case),
        fold_case(text_projection(search), ignore_case),
    )
}

fn number_of(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(number)) => number.as_f64(),
        _ => None,
    }
}

/// Parses a date carried inside a record value.
///
/// Accepted encodings: RFC 3339, naive date-time (`%Y-%m-%dT%H:%M:%S`, with
/// or without fractional seconds, `T` or space separated), and plain date
/// (`%Y-%m-%d`, read as local midnight). Anything else is missing data.
pub(crate) fn parse_date_value(value: Option<&Value>) -> Option<NaiveDateTime> {
    match value {
        Some(Value::String(text)) => parse_date_text(text),
        _ => None,
    }
}

pub(crate) fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Local).naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(text, format) {
            return Some(stamp);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn value_null(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    matches!(value, Some(Value::Null))
}

fn value_not_null(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    !matches!(value, Some(Value::Null))
}

fn string_contains(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    let (target, needle) = string_pair(value, search, ignore_case);
    target.contains(&needle)
}

fn string_does_not_contain(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    let (target, needle) = string_pair(value, search, ignore_case);
    !target.contains(&needle)
}

fn string_starts_with(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    let (target, needle) = string_pair(value, search, ignore_case);
    target.starts_with(&needle)
}

fn string_ends_with(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    let (target, needle) = string_pair(value, search, ignore_case);
    target.ends_with(&needle)
}

fn string_equals(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    let (target, needle) = string_pair(value, search, ignore_case);
    target == needle
}

fn string_does_not_equal(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    let (target, needle) = string_pair(value, search, ignore_case);
    target != needle
}

fn string_empty(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        _ => false,
    }
}

fn string_not_empty(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    match value {
        Some(Value::String(text)) => !text.is_empty(),
        _ => false,
    }
}

fn number_equals(value: Option<&Value>, search: Option<&Value>, _ignore_case: bool) -> bool {
    match (number_of(value), number_of(search)) {
        (Some(target), Some(needle)) => target == needle,
        _ => false,
    }
}

fn number_does_not_equal(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    !number_equals(value, search, ignore_case)
}

fn number_greater_than(value: Option<&Value>, search: Option<&Value>, _ignore_case: bool) -> bool {
    match (number_of(value), number_of(search)) {
        (Some(target), Some(needle)) => target > needle,
        _ => false,
    }
}

fn number_less_than(value: Option<&Value>, search: Option<&Value>, _ignore_case: bool) -> bool {
    match (number_of(value), number_of(search)) {
        (Some(target), Some(needle)) => target < needle,
        _ => false,
    }
}

fn number_greater_than_or_equal(
    value: Option<&Value>,
    search: Option<&Value>,
    _ignore_case: bool,
) -> bool {
    match (number_of(value), number_of(search)) {
        (Some(target), Some(needle)) => target >= needle,
        _ => false,
    }
}

fn number_less_than_or_equal(
    value: Option<&Value>,
    search: Option<&Value>,
    _ignore_case: bool,
) -> bool {
    match (number_of(value), number_of(search)) {
        (Some(target), Some(needle)) => target <= needle,
        _ => false,
    }
}

// JSON cannot encode NaN, so "empty" reduces to null or missing here.
fn number_empty(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn number_not_empty(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    matches!(value, Some(Value::Number(_)))
}

fn boolean_all(_value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    true
}

fn boolean_true(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

fn boolean_false(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    matches!(value, Some(Value::Bool(false)))
}

fn boolean_empty(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        _ => false,
    }
}

fn boolean_not_empty(value: Option<&Value>, search: Option<&Value>, ignore_case: bool) -> bool {
    !boolean_empty(value, search, ignore_case)
}

fn date_equals(value: Option<&Value>, search: Option<&Value>, _ignore_case: bool) -> bool {
    match (parse_date_value(value), parse_date_value(search)) {
        (Some(target), Some(needle)) => target.date() == needle.date(),
        _ => false,
    }
}

fn date_does_not_equal(value: Option<&Value>, search: Option<&Value>, _ignore_case: bool) -> bool {
    match parse_date_value(value) {
        None => true,
        Some(target) => match parse_date_value(search) {
            Some(needle) => target.date() != needle.date(),
            None => true,
        },
    }
}

fn date_before(value: Option<&Value>, search: Option<&Value>, _ignore_case: bool) -> bool {
    match (parse_date_value(value), parse_date_value(search)) {
        (Some(target), Some(needle)) => target < needle,
        _ => false,
    }
}

fn date_after(value: Option<&Value>, search: Option<&Value>, _ignore_case: bool) -> bool {
    match (parse_date_value(value), parse_date_value(search)) {
        (Some(target), Some(needle)) => target > needle,
        _ => false,
    }
}

fn date_today(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    parse_date_value(value).map_or(false, |target| target.date() == Local::now().date_naive())
}

fn date_yesterday(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    let yesterday = match Local::now().date_naive().checked_sub_days(Days::new(1)) {
        Some(day) => day,
        None => return false,
    };
    parse_date_value(value).map_or(false, |target| target.date() == yesterday)
}

fn date_this_month(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    let now = Local::now().date_naive();
    parse_date_value(value).map_or(false, |target| {
        target.year() == now.year() && target.month() == now.month()
    })
}

fn date_last_month(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    let last = match Local::now().date_naive().checked_sub_months(Months::new(1)) {
        Some(day) => day,
        None => return false,
    };
    parse_date_value(value).map_or(false, |target| {
        target.year() == last.year() && target.month() == last.month()
    })
}

fn date_next_month(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    let next = match Local::now().date_naive().checked_add_months(Months::new(1)) {
        Some(day) => day,
        None => return false,
    };
    parse_date_value(value).map_or(false, |target| {
        target.year() == next.year() && target.month() == next.month()
    })
}

fn date_this_year(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    let now = Local::now().date_naive();
    parse_date_value(value).map_or(false, |target| target.year() == now.year())
}

fn date_last_year(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    let now = Local::now().date_naive();
    parse_date_value(value).map_or(false, |target| target.year() == now.year() - 1)
}

fn date_next_year(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    let now = Local::now().date_naive();
    parse_date_value(value).map_or(false, |target| target.year() == now.year() + 1)
}

fn date_empty(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn date_not_empty(value: Option<&Value>, _search: Option<&Value>, _ignore_case: bool) -> bool {
    !matches!(value, None | Some(Value::Null))
}
