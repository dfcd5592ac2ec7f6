// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;
use tarif_domain::{FeePeriod, FeePeriodDraft};

/// A failure reported by the remote fee service.
///
/// The message is opaque to the core and surfaced to the user verbatim as
/// the detail of an [`crate::ErrorNotice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Creates a new `ServiceError`.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }

    /// Returns the service's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, yielding the message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ServiceError {}

/// The contract the core expects from the remote fee service.
///
/// All three operations are asynchronous and may fail independently of any
/// local validation. Resolution order is not guaranteed to match issue
/// order; callers must tolerate out-of-order completion. Deleting an id that
/// is already gone is a service-side no-op.
pub trait FeeService: Send + Sync {
    /// Fetches all stored fee periods.
    fn list(&self) -> impl Future<Output = Result<Vec<FeePeriod>, ServiceError>> + Send;

    /// Stores a new fee period, assigning its identifier.
    fn create(
        &self,
        draft: FeePeriodDraft,
    ) -> impl Future<Output = Result<FeePeriod, ServiceError>> + Send;

    /// Deletes a stored fee period by identifier.
    fn delete(&self, period_id: i64) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
