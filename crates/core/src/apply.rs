// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Intent and resolution transitions for the fee registry.
//!
//! [`apply`] gates user intents by interaction mode and returns the remote
//! effect the orchestrator must run. [`resolve`] folds a remote resolution
//! back into the registry. Both are plain in-memory transitions; neither
//! performs IO.
//!
//! ## Invariants
//!
//! - Exactly one [`Effect::FetchList`] is emitted per entry into browsing
//! - A create failure leaves the registry in composing so the draft survives
//! - A delete resolution returns the registry to browsing regardless of
//!   outcome

use crate::error::CoreError;
use crate::intent::Intent;
use crate::service::ServiceError;
use crate::state::{Mode, RegistryState};
use tarif_domain::{FeePeriod, FeePeriodDraft};

/// A remote operation the orchestrator must run as a consequence of a
/// transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the stored period list.
    FetchList,
    /// Store the submitted draft.
    Create {
        /// The draft to store.
        draft: FeePeriodDraft,
    },
    /// Delete the stored period with this identifier.
    Delete {
        /// The period to delete.
        period_id: i64,
    },
}

/// The tagged result of a remote operation, delivered back to the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A list fetch finished.
    ListFetched {
        /// The fetched periods, or the service failure.
        outcome: Result<Vec<FeePeriod>, ServiceError>,
    },
    /// A create finished.
    CreateFinished {
        /// The stored period with its assigned id, or the service failure.
        outcome: Result<FeePeriod, ServiceError>,
    },
    /// A delete finished.
    DeleteFinished {
        /// The period the delete targeted.
        period_id: i64,
        /// The service outcome.
        outcome: Result<(), ServiceError>,
    },
}

/// Applies a user intent to the registry.
///
/// # Arguments
///
/// * `state` - The registry to transition
/// * `intent` - The user intent to apply
///
/// # Returns
///
/// The remote effect the caller must run, if the transition requires one.
///
/// # Errors
///
/// Returns [`CoreError::IntentNotPermitted`] if the intent is not legal in
/// the current mode. The registry is left untouched in that case.
pub fn apply(state: &mut RegistryState, intent: Intent) -> Result<Option<Effect>, CoreError> {
    match intent {
        Intent::RequestCompose => {
            require_mode(state, Mode::Browsing, "RequestCompose")?;
            state.set_mode(Mode::Composing);
            Ok(None)
        }
        Intent::CancelCompose => {
            require_mode(state, Mode::Composing, "CancelCompose")?;
            state.set_mode(Mode::Browsing);
            Ok(Some(Effect::FetchList))
        }
        Intent::SubmitCreate { draft } => {
            // The overlap check is advisory at data entry and is not re-run
            // here; the fee service is the final authority.
            require_mode(state, Mode::Composing, "SubmitCreate")?;
            Ok(Some(Effect::Create { draft }))
        }
        Intent::RequestDelete { period_id } => {
            require_mode(state, Mode::Browsing, "RequestDelete")?;
            state.begin_confirm_delete(period_id);
            Ok(None)
        }
        Intent::ConfirmDelete => {
            require_mode(state, Mode::ConfirmingDelete, "ConfirmDelete")?;
            let Some(period_id) = state.pending_delete_id else {
                return Err(CoreError::IntentNotPermitted {
                    intent: "ConfirmDelete",
                    mode: state.mode,
                });
            };
            // Mode stays confirming-delete until the resolution arrives.
            Ok(Some(Effect::Delete { period_id }))
        }
        Intent::DeclineDelete => {
            require_mode(state, Mode::ConfirmingDelete, "DeclineDelete")?;
            state.set_mode(Mode::Browsing);
            Ok(Some(Effect::FetchList))
        }
        Intent::RequestRefresh => {
            require_mode(state, Mode::Browsing, "RequestRefresh")?;
            Ok(Some(Effect::FetchList))
        }
    }
}

/// Folds a remote resolution back into the registry.
///
/// Never fails: a service failure becomes the registry's surfaced error.
///
/// # Arguments
///
/// * `state` - The registry to transition
/// * `resolution` - The tagged remote result
///
/// # Returns
///
/// A follow-up effect when the resolution re-enters browsing (which loads
/// the list), otherwise `None`.
pub fn resolve(state: &mut RegistryState, resolution: Resolution) -> Option<Effect> {
    match resolution {
        Resolution::ListFetched { outcome } => {
            match outcome {
                Ok(periods) => state.replace_periods(periods),
                // Keep the stale period set: stale-but-consistent beats empty.
                Err(err) => {
                    state.set_error(String::from("list failed"), Some(err.into_message()));
                }
            }
            None
        }
        Resolution::CreateFinished { outcome } => match outcome {
            Ok(period) => {
                state.add_period(period);
                state.set_mode(Mode::Browsing);
                Some(Effect::FetchList)
            }
            Err(err) => {
                // Stay in composing so the user's draft is not lost.
                state.set_error(String::from("create failed"), Some(err.into_message()));
                None
            }
        },
        Resolution::DeleteFinished { period_id, outcome } => {
            match outcome {
                Ok(()) => state.remove_period(period_id),
                // Delete failures do not re-prompt.
                Err(err) => {
                    state.set_error(String::from("delete failed"), Some(err.into_message()));
                }
            }
            state.set_mode(Mode::Browsing);
            Some(Effect::FetchList)
        }
    }
}

fn require_mode(
    state: &RegistryState,
    expected: Mode,
    intent: &'static str,
) -> Result<(), CoreError> {
    if state.mode == expected {
        Ok(())
    } else {
        Err(CoreError::IntentNotPermitted {
            intent,
            mode: state.mode,
        })
    }
}
