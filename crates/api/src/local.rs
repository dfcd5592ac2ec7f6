// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;
use tarif::{FeeService, ServiceError};
use tarif_domain::{FeePeriod, FeePeriodDraft};
use tarif_persistence::FeeStore;
use tokio::sync::Mutex;

/// In-process fee service backed directly by the persistence store.
///
/// This is the deployment where the store lives in the same process as the
/// session. Store failures surface as service errors carrying the store's
/// message verbatim, including create-time range conflicts.
#[derive(Clone)]
pub struct LocalFeeService {
    store: Arc<Mutex<FeeStore>>,
}

impl LocalFeeService {
    /// Creates a service owning the given store.
    #[must_use]
    pub fn new(store: FeeStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Creates a service over a store shared with other components.
    #[must_use]
    pub const fn shared(store: Arc<Mutex<FeeStore>>) -> Self {
        Self { store }
    }
}

impl FeeService for LocalFeeService {
    async fn list(&self) -> Result<Vec<FeePeriod>, ServiceError> {
        let store = self.store.lock().await;
        store
            .list()
            .map_err(|err| ServiceError::new(err.to_string()))
    }

    async fn create(&self, draft: FeePeriodDraft) -> Result<FeePeriod, ServiceError> {
        let mut store = self.store.lock().await;
        store
            .create(&draft)
            .map_err(|err| ServiceError::new(err.to_string()))
    }

    async fn delete(&self, period_id: i64) -> Result<(), ServiceError> {
        let mut store = self.store.lock().await;
        store
            .delete(period_id)
            .map_err(|err| ServiceError::new(err.to_string()))
    }
}
