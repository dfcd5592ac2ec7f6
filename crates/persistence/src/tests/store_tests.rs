// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FeeStore, PersistenceError};
use chrono::{DateTime, TimeZone, Utc};
use tarif_domain::{DomainError, FeePeriodDraft};

fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 5, 0, 0).unwrap()
}

fn draft(start: DateTime<Utc>, end: DateTime<Utc>) -> FeePeriodDraft {
    FeePeriodDraft {
        base_fee: 10.0,
        price_per_unit: 0.5,
        monthly_discount: 45.0,
        date_start: start,
        date_end: end,
    }
}

fn store_with_december_period() -> FeeStore {
    let mut store = FeeStore::open_in_memory().expect("could not create memory database");
    store
        .create(&draft(instant(2022, 12, 1), instant(2023, 1, 1)))
        .expect("failed to store fee period");
    store
}

#[test]
fn test_list_is_empty_for_a_fresh_store() {
    let store = FeeStore::open_in_memory().expect("could not create memory database");
    let periods = store.list().expect("failed to list fee periods");
    assert!(periods.is_empty());
}

#[test]
fn test_create_assigns_an_id_and_round_trips() {
    let mut store = FeeStore::open_in_memory().expect("could not create memory database");
    let submitted = draft(instant(2022, 12, 1), instant(2023, 1, 1));

    let stored = store.create(&submitted).expect("failed to store fee period");

    assert_eq!(stored.period_id(), Some(1));
    assert_eq!(stored.base_fee(), submitted.base_fee);
    assert_eq!(stored.price_per_unit(), submitted.price_per_unit);
    assert_eq!(stored.monthly_discount(), submitted.monthly_discount);
    assert_eq!(stored.date_start(), submitted.date_start);
    assert_eq!(stored.date_end(), submitted.date_end);

    let periods = store.list().expect("failed to list fee periods");
    assert_eq!(periods, vec![stored]);
}

#[test]
fn test_create_rejects_an_overlapping_range() {
    let mut store = store_with_december_period();

    let result = store.create(&draft(instant(2022, 12, 15), instant(2023, 1, 15)));

    assert_eq!(
        result.unwrap_err(),
        PersistenceError::RangeConflict {
            period_id: Some(1)
        }
    );
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_create_accepts_a_boundary_touching_range() {
    let mut store = store_with_december_period();

    let stored = store
        .create(&draft(instant(2023, 1, 1), instant(2023, 2, 1)))
        .expect("boundary-touching range must be accepted");

    assert_eq!(stored.period_id(), Some(2));
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn test_create_rejects_a_reversed_range() {
    let mut store = FeeStore::open_in_memory().expect("could not create memory database");

    let result = store.create(&draft(instant(2023, 1, 1), instant(2022, 12, 1)));

    assert!(matches!(
        result.unwrap_err(),
        PersistenceError::InvalidPeriod(DomainError::EmptyDateRange { .. })
    ));
}

#[test]
fn test_create_rejects_a_negative_amount() {
    let mut store = FeeStore::open_in_memory().expect("could not create memory database");
    let mut submitted = draft(instant(2022, 12, 1), instant(2023, 1, 1));
    submitted.monthly_discount = -45.0;

    let result = store.create(&submitted);

    assert!(matches!(
        result.unwrap_err(),
        PersistenceError::InvalidPeriod(DomainError::InvalidAmount {
            field: "monthlyDiscount",
            ..
        })
    ));
}

#[test]
fn test_delete_removes_the_period() {
    let mut store = store_with_december_period();

    store.delete(1).expect("failed to delete fee period");

    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_delete_of_a_missing_id_succeeds() {
    let mut store = store_with_december_period();

    store.delete(99).expect("deleting a missing id must succeed");

    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_find_in_range_hits_containment() {
    let store = store_with_december_period();

    let found = store
        .find_in_range(instant(2022, 12, 10), instant(2022, 12, 20))
        .expect("failed to query range");

    assert_eq!(found.unwrap().period_id(), Some(1));
}

#[test]
fn test_find_in_range_misses_a_disjoint_probe() {
    let store = store_with_december_period();

    let found = store
        .find_in_range(instant(2023, 3, 1), instant(2023, 4, 1))
        .expect("failed to query range");

    assert!(found.is_none());
}
