// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the orchestration boundary.

use tarif::{CoreError, Mode};
use thiserror::Error;

/// Errors crossing the orchestration boundary.
///
/// These are distinct from core errors and represent the API contract.
/// Remote service failures never appear here: they are folded into the
/// registry's surfaced error instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The intent is not legal in the current interaction mode.
    #[error("Intent '{intent}' is not permitted while {mode}")]
    IntentNotPermitted {
        /// The rejected intent's name.
        intent: &'static str,
        /// The mode the registry was in.
        mode: Mode,
    },
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::IntentNotPermitted { intent, mode } => {
            ApiError::IntentNotPermitted { intent, mode }
        }
    }
}
