// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tarif_domain::FeePeriod;

/// The interaction mode gating which user-initiated mutation is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Viewing the stored periods. Initial state.
    #[default]
    Browsing,
    /// Composing a new period. The draft lives with the caller until submit.
    Composing,
    /// Awaiting confirmation (and then resolution) of a delete.
    ConfirmingDelete,
}

impl Mode {
    /// Converts this mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::Composing => "composing",
            Self::ConfirmingDelete => "confirming-delete",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error surfaced to the user, produced by a failed remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    /// A short, fixed summary of what failed.
    pub summary: String,
    /// The remote service's message, surfaced verbatim.
    pub detail: Option<String>,
}

impl ErrorNotice {
    /// Creates a new `ErrorNotice`.
    #[must_use]
    pub const fn new(summary: String, detail: Option<String>) -> Self {
        Self { summary, detail }
    }
}

/// The complete registry state for one session.
///
/// The registry is the single source of truth for the known period set, the
/// interaction mode, and the last surfaced error. All mutation goes through
/// the named transitions below; none of them can fail. Failures originate
/// upstream in the orchestrator and arrive as [`RegistryState::set_error`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistryState {
    /// The known fee periods. Insertion order carries no meaning.
    pub periods: Vec<FeePeriod>,
    /// The current interaction mode.
    pub mode: Mode,
    /// The period queued for deletion; present only while confirming.
    pub pending_delete_id: Option<i64>,
    /// The last surfaced error, if any.
    pub last_error: Option<ErrorNotice>,
}

impl RegistryState {
    /// Creates a new empty registry in browsing mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            periods: Vec::new(),
            mode: Mode::Browsing,
            pending_delete_id: None,
            last_error: None,
        }
    }

    /// Transitions to the given mode.
    ///
    /// Legal from any mode to any mode. Entering browsing clears the pending
    /// delete id; entering composing clears the last surfaced error.
    pub fn set_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Browsing => self.pending_delete_id = None,
            Mode::Composing => self.last_error = None,
            Mode::ConfirmingDelete => {}
        }
        self.mode = mode;
    }

    /// Enters confirming-delete mode with the given period queued.
    pub fn begin_confirm_delete(&mut self, period_id: i64) {
        self.pending_delete_id = Some(period_id);
        self.mode = Mode::ConfirmingDelete;
    }

    /// Replaces the known period set wholesale after a successful list fetch.
    ///
    /// No validation is performed: the remote set is trusted as-is, even if
    /// it violates the non-overlap rule. The registry does not self-heal
    /// pre-existing violations.
    pub fn replace_periods(&mut self, periods: Vec<FeePeriod>) {
        self.periods = periods;
        self.last_error = None;
    }

    /// Inserts a period returned by a successful remote create.
    ///
    /// The overlap rule is not re-checked here; validation happened at data
    /// entry and the remote service is the final authority.
    pub fn add_period(&mut self, period: FeePeriod) {
        self.periods.push(period);
        self.last_error = None;
    }

    /// Removes a period by identifier. Silent no-op when the id is absent.
    pub fn remove_period(&mut self, period_id: i64) {
        self.periods
            .retain(|period| period.period_id() != Some(period_id));
        self.last_error = None;
    }

    /// Surfaces an error from a failed remote operation.
    pub fn set_error(&mut self, summary: String, detail: Option<String>) {
        self.last_error = Some(ErrorNotice::new(summary, detail));
    }

    /// Clears the surfaced error.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
