// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Mode;

/// Errors that can occur when applying a user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The intent is not legal in the current interaction mode.
    IntentNotPermitted {
        /// The rejected intent's name.
        intent: &'static str,
        /// The mode the registry was in.
        mode: Mode,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntentNotPermitted { intent, mode } => {
                write!(f, "Intent '{intent}' is not permitted while {mode}")
            }
        }
    }
}

impl std::error::Error for CoreError {}
