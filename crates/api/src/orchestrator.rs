// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The asynchronous half of the orchestrator.
//!
//! Each issued call runs as a spawned task; its resolution comes back over
//! an mpsc channel and is applied on the owning task, so the registry is
//! only ever touched from one place. Remote calls are never cancelled:
//! abandoning the work they belong to merely stales their token, and the
//! session drops the late resolution.

use crate::error::ApiError;
use crate::session::{CallToken, IssuedCall, Session};
use std::sync::Arc;
use tarif::{Effect, FeeService, Intent, RegistryState, Resolution};
use tokio::sync::{mpsc, watch};

/// Drives a [`Session`] against a fee service.
pub struct Orchestrator<S> {
    session: Session,
    service: Arc<S>,
    resolution_tx: mpsc::UnboundedSender<(CallToken, Resolution)>,
    resolution_rx: mpsc::UnboundedReceiver<(CallToken, Resolution)>,
    snapshot_tx: watch::Sender<RegistryState>,
    in_flight: usize,
}

impl<S> Orchestrator<S>
where
    S: FeeService + 'static,
{
    /// Creates an orchestrator and launches the session's initial list
    /// fetch.
    #[must_use]
    pub fn new(service: Arc<S>) -> Self {
        let (resolution_tx, resolution_rx) = mpsc::unbounded_channel();
        let mut session: Session = Session::new();
        let initial: IssuedCall = session.start();
        let snapshot_tx: watch::Sender<RegistryState> = watch::Sender::new(session.state().clone());

        let mut orchestrator: Self = Self {
            session,
            service,
            resolution_tx,
            resolution_rx,
            snapshot_tx,
            in_flight: 0,
        };
        orchestrator.launch(initial);
        orchestrator
    }

    /// Returns the registry state, read-only.
    #[must_use]
    pub const fn state(&self) -> &RegistryState {
        self.session.state()
    }

    /// Returns a receiver of registry snapshots for the presentation layer.
    ///
    /// A fresh snapshot is published after every applied intent and every
    /// applied resolution.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RegistryState> {
        self.snapshot_tx.subscribe()
    }

    /// Applies a user intent, launching any resulting remote call.
    ///
    /// # Errors
    ///
    /// Returns an error if the intent is not legal in the current mode.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), ApiError> {
        let issued: Option<IssuedCall> = self.session.handle(intent)?;
        self.publish();
        if let Some(call) = issued {
            self.launch(call);
        }
        Ok(())
    }

    /// Applies resolutions in arrival order until no call is in flight.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Some((token, resolution)) = self.resolution_rx.recv().await else {
                break;
            };
            self.apply_resolution(token, resolution);
        }
    }

    fn apply_resolution(&mut self, token: CallToken, resolution: Resolution) {
        self.in_flight -= 1;
        let follow_up: Option<IssuedCall> = self.session.resolve(token, resolution);
        self.publish();
        if let Some(call) = follow_up {
            self.launch(call);
        }
    }

    fn launch(&mut self, call: IssuedCall) {
        self.in_flight += 1;
        let service: Arc<S> = Arc::clone(&self.service);
        let tx = self.resolution_tx.clone();
        let IssuedCall { token, effect } = call;

        tokio::spawn(async move {
            let resolution: Resolution = match effect {
                Effect::FetchList => Resolution::ListFetched {
                    outcome: service.list().await,
                },
                Effect::Create { draft } => Resolution::CreateFinished {
                    outcome: service.create(draft).await,
                },
                Effect::Delete { period_id } => Resolution::DeleteFinished {
                    period_id,
                    outcome: service.delete(period_id).await,
                },
            };
            // A closed receiver means the session ended; nothing to deliver.
            let _ = tx.send((token, resolution));
        });
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.session.state().clone());
    }
}
