// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure validation for fee periods.
//!
//! Two distinct checks live here:
//!
//! - `validate_period_fields`: structural validation of a draft (amounts,
//!   range ordering)
//! - `find_overlap`: the interval overlap rule applied to a proposed range
//!   against the known set
//!
//! ## Invariants
//!
//! - No two stored periods may share an instant strictly inside both ranges
//! - Boundary coincidence (one period ending exactly where another starts)
//!   is permitted
//! - The overlap check is advisory at data entry; the fee service re-checks
//!   at create time

use crate::error::DomainError;
use crate::types::{FeePeriod, FeePeriodDraft};
use chrono::{DateTime, Utc};

/// Validates a draft's structural field constraints.
///
/// This checks amounts and range ordering only. It does NOT check for
/// overlap with existing periods (that requires context; see
/// [`find_overlap`]).
///
/// # Arguments
///
/// * `draft` - The draft to validate
///
/// # Errors
///
/// Returns an error if:
/// - Any amount is negative or not finite
/// - `date_start` is not strictly before `date_end`
pub fn validate_period_fields(draft: &FeePeriodDraft) -> Result<(), DomainError> {
    validate_amount("baseFee", draft.base_fee)?;
    validate_amount("pricePerUnit", draft.price_per_unit)?;
    validate_amount("monthlyDiscount", draft.monthly_discount)?;

    // Rule: the validity range must not be reversed or empty
    if draft.date_start >= draft.date_end {
        return Err(DomainError::EmptyDateRange {
            date_start: draft.date_start,
            date_end: draft.date_end,
        });
    }

    Ok(())
}

fn validate_amount(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidAmount { field, value });
    }
    Ok(())
}

/// Reports the first existing period the proposed range conflicts with.
///
/// A conflict exists when either endpoint of the proposed range falls
/// strictly inside an existing period's range. The comparison is strict on
/// both sides, so a proposed range that starts exactly where an existing
/// period ends (or vice versa) does not conflict.
///
/// The caller must ensure `proposed_start < proposed_end` before calling
/// (see [`validate_period_fields`]); the order of `existing` carries no
/// meaning, and any one conflicting period may be reported.
///
/// This function is pure, deterministic, and has no side effects. It is
/// cheap enough to run on every change to the proposed range.
#[must_use]
pub fn find_overlap<'a>(
    existing: &'a [FeePeriod],
    proposed_start: DateTime<Utc>,
    proposed_end: DateTime<Utc>,
) -> Option<&'a FeePeriod> {
    existing.iter().find(|period| {
        let starts_inside: bool =
            proposed_start > period.date_start() && proposed_start < period.date_end();
        let ends_inside: bool =
            proposed_end > period.date_start() && proposed_end < period.date_end();
        starts_inside || ends_inside
    })
}
