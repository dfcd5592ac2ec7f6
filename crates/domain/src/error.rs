// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A monetary amount is negative or not a finite number.
    InvalidAmount {
        /// The field that carried the invalid amount.
        field: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The validity range is reversed or empty.
    EmptyDateRange {
        /// Start of the proposed range.
        date_start: DateTime<Utc>,
        /// End of the proposed range.
        date_end: DateTime<Utc>,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount { field, value } => {
                write!(
                    f,
                    "Invalid {field}: must be a non-negative finite amount, got {value}"
                )
            }
            Self::EmptyDateRange {
                date_start,
                date_end,
            } => {
                write!(
                    f,
                    "Invalid date range: start {date_start} must be strictly before end {date_end}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
