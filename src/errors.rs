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

//! # Ro Error Module
//!
//! This module defines the error types and utilities used throughout the Ro
//! engine for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Ro distinguishes two failure classes:
//!
//! - **Configuration errors** are programmer errors and fail fast: asking a
//!   condition registry for an unknown condition name, exceeding the grouping
//!   expression cap, or handing a malformed JSON configuration to a state
//!   factory. These surface as [`RoError`] values.
//! - **Data errors** never surface as `RoError`. Missing fields, null values,
//!   and out-of-range paging requests are absorbed by the pipeline and, where
//!   relevant, reported through result metadata (see the paging module).
//!
//! ## Error Categories
//!
//! - **Condition**: Unknown filtering condition name
//! - **Grouping**: Grouping request exceeding the supported expression count
//! - **Validation**: Input validation failures in configuration factories
//! - **Internal**: Unexpected internal failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Ro.
///
/// This is a type alias for `std::result::Result<T, RoError>` that provides
/// a more concise way to write function signatures that return Ro errors.
pub type Result<T> = std::result::Result<T, RoError>;

/// Canonical error enumeration for Ro.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum RoError {
    /// An unknown condition name was requested from a filtering operand.
    #[error("filtering condition '{name}' is not defined")]
    Condition { name: String },

    /// A grouping request exceeded the supported expression count.
    #[error("grouping error: {message}")]
    Grouping { message: String },

    /// Validation errors triggered by invalid parameters or configuration.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RoError {
    /// Helper to construct unknown-condition errors.
    pub fn condition<T: Into<String>>(name: T) -> Self {
        RoError::Condition { name: name.into() }
    }

    /// Helper to construct grouping errors.
    pub fn grouping<T: Into<String>>(message: T) -> Self {
        RoError::Grouping {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        RoError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        RoError::Internal(message.into())
    }
}
