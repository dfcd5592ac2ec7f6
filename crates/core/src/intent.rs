// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tarif_domain::FeePeriodDraft;

/// A user intent represented as data only.
///
/// Intents are the only way for the presentation layer to request state
/// changes. Whether an intent is currently permitted depends on the
/// interaction mode and is decided by [`crate::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Begin composing a new period.
    RequestCompose,
    /// Abandon the composing form. The draft is discarded by the caller.
    CancelCompose,
    /// Submit the composed draft to the fee service.
    SubmitCreate {
        /// The draft to submit.
        draft: FeePeriodDraft,
    },
    /// Ask for confirmation before deleting a period.
    RequestDelete {
        /// The period to delete.
        period_id: i64,
    },
    /// Confirm the queued delete, issuing the remote call.
    ConfirmDelete,
    /// Decline the queued delete. No remote call is made.
    DeclineDelete,
    /// Reload the period list at the user's explicit request.
    RequestRefresh,
}

impl Intent {
    /// Returns the intent's name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequestCompose => "RequestCompose",
            Self::CancelCompose => "CancelCompose",
            Self::SubmitCreate { .. } => "SubmitCreate",
            Self::RequestDelete { .. } => "RequestDelete",
            Self::ConfirmDelete => "ConfirmDelete",
            Self::DeclineDelete => "DeclineDelete",
            Self::RequestRefresh => "RequestRefresh",
        }
    }
}
