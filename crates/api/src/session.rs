// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The synchronous half of the orchestrator.
//!
//! A [`Session`] owns the registry and a generation counter per call kind.
//! Issuing a remote call bumps the counter for its kind and mints a
//! [`CallToken`]; a resolution presented with a token whose generation is no
//! longer current is dropped. Intents that supersede an in-flight call
//! (cancelling a compose, declining a delete) bump the counter themselves,
//! so the late resolution goes stale instead of being applied to a state
//! that has moved on.
//!
//! ## Invariants
//!
//! - At most one call per kind is live at a time; a newer issue of the same
//!   kind stales the older one (last issued wins for list fetches)
//! - Dropping a stale resolution never touches the registry

use crate::error::{ApiError, translate_core_error};
use tarif::{Effect, Intent, RegistryState, Resolution, apply, resolve};
use tracing::debug;

/// The remote operation kind a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    List,
    Create,
    Delete,
}

/// A resolution token identifying one issued remote call.
///
/// Tokens are minted by the session when a call is issued and must be
/// presented with the call's resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToken {
    kind: CallKind,
    generation: u64,
}

/// A remote call the driver must run, tagged with its resolution token.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedCall {
    /// The token to present with the resolution.
    pub token: CallToken,
    /// The operation to run.
    pub effect: Effect,
}

/// One user's interaction session with the fee registry.
#[derive(Debug, Default)]
pub struct Session {
    state: RegistryState,
    list_generation: u64,
    create_generation: u64,
    delete_generation: u64,
}

impl Session {
    /// Creates a session with an empty registry in browsing mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the session, issuing the list fetch for the initial browsing
    /// mode. Call exactly once, before handling intents.
    pub fn start(&mut self) -> IssuedCall {
        self.issue(Effect::FetchList)
    }

    /// Returns the registry state, read-only.
    #[must_use]
    pub const fn state(&self) -> &RegistryState {
        &self.state
    }

    /// Applies a user intent, minting the remote call it requires.
    ///
    /// # Errors
    ///
    /// Returns an error if the intent is not legal in the current mode. The
    /// registry and all generation counters are left untouched in that case.
    pub fn handle(&mut self, intent: Intent) -> Result<Option<IssuedCall>, ApiError> {
        // Intents that abandon the work a live call belongs to must stale
        // that call, so its eventual resolution is dropped.
        let supersedes: Option<CallKind> = match &intent {
            Intent::CancelCompose => Some(CallKind::Create),
            Intent::DeclineDelete => Some(CallKind::Delete),
            _ => None,
        };

        let effect: Option<Effect> =
            apply(&mut self.state, intent).map_err(translate_core_error)?;

        if let Some(kind) = supersedes {
            self.bump(kind);
        }

        Ok(effect.map(|effect| self.issue(effect)))
    }

    /// Applies a remote resolution, minting any follow-up call.
    ///
    /// A resolution whose token is no longer current is dropped without
    /// touching the registry.
    pub fn resolve(&mut self, token: CallToken, resolution: Resolution) -> Option<IssuedCall> {
        if token.generation != self.generation(token.kind) {
            debug!(
                kind = ?token.kind,
                generation = token.generation,
                current = self.generation(token.kind),
                "Dropped stale resolution"
            );
            return None;
        }

        resolve(&mut self.state, resolution).map(|effect| self.issue(effect))
    }

    fn issue(&mut self, effect: Effect) -> IssuedCall {
        let kind: CallKind = match &effect {
            Effect::FetchList => CallKind::List,
            Effect::Create { .. } => CallKind::Create,
            Effect::Delete { .. } => CallKind::Delete,
        };
        let generation: u64 = self.bump(kind);
        IssuedCall {
            token: CallToken { kind, generation },
            effect,
        }
    }

    fn bump(&mut self, kind: CallKind) -> u64 {
        let counter: &mut u64 = match kind {
            CallKind::List => &mut self.list_generation,
            CallKind::Create => &mut self.create_generation,
            CallKind::Delete => &mut self.delete_generation,
        };
        *counter += 1;
        *counter
    }

    const fn generation(&self, kind: CallKind) -> u64 {
        match kind {
            CallKind::List => self.list_generation,
            CallKind::Create => self.create_generation,
            CallKind::Delete => self.delete_generation,
        }
    }
}
