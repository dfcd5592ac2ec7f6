// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Mode, RegistryState};
use chrono::{DateTime, TimeZone, Utc};
use tarif_domain::{FeePeriod, FeePeriodDraft};

pub fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn january_period(id: i64) -> FeePeriod {
    FeePeriod::with_id(
        id,
        10.0,
        0.5,
        45.0,
        instant(2024, 1, 1),
        instant(2024, 2, 1),
    )
}

pub fn march_draft() -> FeePeriodDraft {
    FeePeriodDraft {
        base_fee: 12.0,
        price_per_unit: 0.4,
        monthly_discount: 50.0,
        date_start: instant(2024, 3, 1),
        date_end: instant(2024, 4, 1),
    }
}

pub fn browsing_registry() -> RegistryState {
    let mut state: RegistryState = RegistryState::new();
    state.replace_periods(vec![january_period(1)]);
    state
}

pub fn composing_registry() -> RegistryState {
    let mut state: RegistryState = browsing_registry();
    state.set_mode(Mode::Composing);
    state
}
