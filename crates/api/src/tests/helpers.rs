// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tarif::{FeeService, ServiceError};
use tarif_domain::{FeePeriod, FeePeriodDraft};
use tokio::sync::Notify;

pub fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn december_draft() -> FeePeriodDraft {
    FeePeriodDraft {
        base_fee: 10.0,
        price_per_unit: 0.5,
        monthly_discount: 45.0,
        date_start: instant(2022, 12, 1),
        date_end: instant(2023, 1, 1),
    }
}

pub fn december_period(id: i64) -> FeePeriod {
    FeePeriod::from_draft(id, &december_draft())
}

/// A fee service whose outcomes are scripted per operation.
///
/// Unscripted lists resolve to an empty set; unscripted creates and deletes
/// fail, so a test cannot silently exercise a path it did not script.
/// Creates can additionally be held at a gate to model a slow remote call.
#[derive(Default)]
pub struct ScriptedService {
    lists: Mutex<VecDeque<Result<Vec<FeePeriod>, ServiceError>>>,
    creates: Mutex<VecDeque<Result<FeePeriod, ServiceError>>>,
    deletes: Mutex<VecDeque<Result<(), ServiceError>>>,
    hold_creates: AtomicBool,
    create_gate: Notify,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_list(&self, outcome: Result<Vec<FeePeriod>, ServiceError>) {
        self.lists.lock().unwrap().push_back(outcome);
    }

    pub fn script_create(&self, outcome: Result<FeePeriod, ServiceError>) {
        self.creates.lock().unwrap().push_back(outcome);
    }

    pub fn script_delete(&self, outcome: Result<(), ServiceError>) {
        self.deletes.lock().unwrap().push_back(outcome);
    }

    /// Makes subsequent creates wait at the gate until released.
    pub fn hold_creates(&self) {
        self.hold_creates.store(true, Ordering::SeqCst);
    }

    /// Releases one held create.
    pub fn release_create(&self) {
        self.create_gate.notify_one();
    }
}

impl FeeService for ScriptedService {
    async fn list(&self) -> Result<Vec<FeePeriod>, ServiceError> {
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create(&self, _draft: FeePeriodDraft) -> Result<FeePeriod, ServiceError> {
        if self.hold_creates.load(Ordering::SeqCst) {
            self.create_gate.notified().await;
        }
        self.creates
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::new(String::from("unscripted create"))))
    }

    async fn delete(&self, _period_id: i64) -> Result<(), ServiceError> {
        self.deletes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::new(String::from("unscripted delete"))))
    }
}
