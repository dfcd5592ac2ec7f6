// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A proposed fee period before the fee service has assigned an identifier.
///
/// Drafts are disposable values composed at data entry and handed to the fee
/// service on submission; nothing owns them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePeriodDraft {
    /// Fixed monthly base fee.
    pub base_fee: f64,
    /// Price per consumed unit.
    pub price_per_unit: f64,
    /// Monthly discount deducted from the invoice.
    pub monthly_discount: f64,
    /// Start of the validity range (UTC).
    pub date_start: DateTime<Utc>,
    /// End of the validity range (UTC). Must be strictly after `date_start`.
    pub date_end: DateTime<Utc>,
}

/// A fee period: a price schedule valid over a date range.
///
/// Periods are created only by a successful fee service create and removed
/// only by a successful delete; they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePeriod {
    /// The numeric identifier assigned by the fee service.
    /// `None` indicates the period has not been persisted yet.
    #[serde(rename = "id")]
    period_id: Option<i64>,
    /// Fixed monthly base fee.
    base_fee: f64,
    /// Price per consumed unit.
    price_per_unit: f64,
    /// Monthly discount deducted from the invoice.
    monthly_discount: f64,
    /// Start of the validity range (UTC).
    date_start: DateTime<Utc>,
    /// End of the validity range (UTC).
    date_end: DateTime<Utc>,
}

impl FeePeriod {
    /// Creates a new `FeePeriod` without a persisted identifier.
    ///
    /// # Arguments
    ///
    /// * `base_fee` - Fixed monthly base fee
    /// * `price_per_unit` - Price per consumed unit
    /// * `monthly_discount` - Monthly discount deducted from the invoice
    /// * `date_start` - Start of the validity range (UTC)
    /// * `date_end` - End of the validity range (UTC)
    #[must_use]
    pub const fn new(
        base_fee: f64,
        price_per_unit: f64,
        monthly_discount: f64,
        date_start: DateTime<Utc>,
        date_end: DateTime<Utc>,
    ) -> Self {
        Self {
            period_id: None,
            base_fee,
            price_per_unit,
            monthly_discount,
            date_start,
            date_end,
        }
    }

    /// Creates a `FeePeriod` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(
        period_id: i64,
        base_fee: f64,
        price_per_unit: f64,
        monthly_discount: f64,
        date_start: DateTime<Utc>,
        date_end: DateTime<Utc>,
    ) -> Self {
        Self {
            period_id: Some(period_id),
            base_fee,
            price_per_unit,
            monthly_discount,
            date_start,
            date_end,
        }
    }

    /// Creates a `FeePeriod` from a draft and the identifier the fee service
    /// assigned to it.
    #[must_use]
    pub const fn from_draft(period_id: i64, draft: &FeePeriodDraft) -> Self {
        Self {
            period_id: Some(period_id),
            base_fee: draft.base_fee,
            price_per_unit: draft.price_per_unit,
            monthly_discount: draft.monthly_discount,
            date_start: draft.date_start,
            date_end: draft.date_end,
        }
    }

    /// Returns the persisted identifier, if assigned.
    #[must_use]
    pub const fn period_id(&self) -> Option<i64> {
        self.period_id
    }

    /// Returns the fixed monthly base fee.
    #[must_use]
    pub const fn base_fee(&self) -> f64 {
        self.base_fee
    }

    /// Returns the price per consumed unit.
    #[must_use]
    pub const fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    /// Returns the monthly discount.
    #[must_use]
    pub const fn monthly_discount(&self) -> f64 {
        self.monthly_discount
    }

    /// Returns the start of the validity range.
    #[must_use]
    pub const fn date_start(&self) -> DateTime<Utc> {
        self.date_start
    }

    /// Returns the end of the validity range.
    #[must_use]
    pub const fn date_end(&self) -> DateTime<Utc> {
        self.date_end
    }
}
