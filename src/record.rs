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

//! # Ro Record Module
//!
//! This module provides the core data structures for representing tabular
//! rows in the Ro engine. A record is the fundamental unit of data that
//! flows through the filtering, sorting, grouping, and paging operations.
//!
//! ## Design Principles
//!
//! - **Flexibility**: Records use JSON (serde_json) maps for rows, enabling
//!   open, schema-less field sets; schema is declared by the caller through
//!   column metadata, never inferred
//! - **Missing-data tolerance**: A field absent from a record reads as
//!   missing; conditions and comparators are total over missing and null
//!   values
//! - **Immutability-friendly**: The engine's operations return new record
//!   sequences and never mutate their input
//!
//! ## Usage Example
//!
//! ```rust
//! use rox::record::{RoColumn, RoDataType, RoRecord};
//! use serde_json::json;
//!
//! let mut record = RoRecord::new();
//! record.insert("name".into(), json!("Anna"));
//! record.insert("age".into(), json!(34));
//!
//! let columns = vec![
//!     RoColumn::new("name", RoDataType::String),
//!     RoColumn::new("age", RoDataType::Number),
//! ];
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, RoError};

/// One row of tabular data: an open field-name to value mapping.
///
/// A key that is absent models the distinction the engine cares about
/// between a *missing* field and an explicit `Value::Null`. Most filtering
/// conditions treat a missing field as non-matching; the explicit
/// `null`/`empty` condition family observes the difference.
pub type RoRecord = Map<String, Value>;

/// Convenience alias for working on sequences of records.
pub type RoRecordSet = Vec<RoRecord>;

/// Abstract data types a column can declare.
///
/// The data type selects which condition catalog applies to a field; the
/// engine performs no inference beyond what the caller declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoDataType {
    /// Textual values, compared on their string projection.
    String,
    /// Numeric values, compared as `f64`.
    Number,
    /// Boolean values.
    Boolean,
    /// Calendar values, carried as ISO-8601 strings inside records.
    Date,
}

impl RoDataType {
    /// Parses a data type from its lowercase configuration name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "string" => Ok(RoDataType::String),
            "number" => Ok(RoDataType::Number),
            "boolean" => Ok(RoDataType::Boolean),
            "date" => Ok(RoDataType::Date),
            other => Err(RoError::validation(format!(
                "unknown data type '{other}' (expected one of: string, number, boolean, date)"
            ))),
        }
    }

    /// Returns the lowercase configuration name of the data type.
    pub fn name(&self) -> &'static str {
        match self {
            RoDataType::String => "string",
            RoDataType::Number => "number",
            RoDataType::Boolean => "boolean",
            RoDataType::Date => "date",
        }
    }
}

/// Column metadata supplied by the caller: a field name plus its declared
/// data type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoColumn {
    /// Name of the record field this column reads.
    pub field_name: String,
    /// Declared data type driving the legal condition catalog.
    pub data_type: RoDataType,
}

impl RoColumn {
    /// Constructs column metadata for a field.
    pub fn new(field_name: impl Into<String>, data_type: RoDataType) -> Self {
        RoColumn {
            field_name: field_name.into(),
            data_type,
        }
    }
}
