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

//! Shared fixtures for the integration tests.
//!
//! The canonical sample set is five rows over four typed columns:
//! `number` 0..4, `string` `"row{i}, col1"`, `boolean` alternating starting
//! at false, and `date` ascending one day per row starting today. Row 0's
//! date is today at local midnight, so "after now" matches exactly the four
//! later rows.

#![allow(dead_code)]

use chrono::{Days, Local};
use serde_json::{json, Value};

use rox::{RoRecord, RoRecordSet};

/// Builds a record from a JSON object literal.
pub fn record(value: Value) -> RoRecord {
    value
        .as_object()
        .expect("record literal must be a JSON object")
        .clone()
}

/// The canonical five-row sample set.
pub fn sample_data() -> RoRecordSet {
    let today = Local::now().date_naive();
    (0..5)
        .map(|i| {
            let date = today
                .checked_add_days(Days::new(i as u64))
                .expect("sample date in range");
            record(json!({
                "number": i,
                "string": format!("row{i}, col1"),
                "boolean": i % 2 == 1,
                "date": date.format("%Y-%m-%d").to_string(),
            }))
        })
        .collect()
}

/// Projects one column of a record sequence.
pub fn column_values(data: &[RoRecord], field: &str) -> Vec<Value> {
    data.iter()
        .map(|record| record.get(field).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Projects the `number` column as integers.
pub fn numbers(data: &[RoRecord]) -> Vec<i64> {
    data.iter()
        .map(|record| {
            record
                .get("number")
                .and_then(Value::as_i64)
                .expect("sample rows carry an integer 'number'")
        })
        .collect()
}

/// The current local time in the naive date-time encoding records use.
pub fn now_stamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
