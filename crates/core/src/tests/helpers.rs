// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crew_ftl_domain::{DutyRecord, PilotTimeSeries, days_after};
use time::Date;
use time::macros::date;

/// Day 1 of every test timeline.
pub const BASE_DATE: Date = date!(2026 - 03 - 01);

/// Returns the date `n` days after `BASE_DATE` (day 0 is `BASE_DATE`).
pub fn day(n: i64) -> Date {
    days_after(BASE_DATE, n)
}

pub fn duty(n: i64, start: &str, end: &str) -> DutyRecord {
    DutyRecord::on(day(n)).with_duty(start, end)
}

pub fn create_test_series(records: Vec<DutyRecord>) -> PilotTimeSeries {
    PilotTimeSeries::new(records).unwrap()
}

/// Builds a series from a day pattern starting at `BASE_DATE`.
///
/// `D` is an 08:00-16:00 duty, any other character leaves the date empty.
pub fn create_pattern_series(pattern: &str) -> PilotTimeSeries {
    let records: Vec<DutyRecord> = pattern
        .chars()
        .enumerate()
        .filter(|(_, c)| *c == 'D')
        .map(|(i, _)| duty(i64::try_from(i).unwrap(), "08:00", "16:00"))
        .collect();
    create_test_series(records)
}

pub fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

/// Builds `len` consecutive 08:00-16:00 duties from `BASE_DATE`, leaving
/// the listed day indices empty.
pub fn create_series_with_days_off(len: i64, off: &[i64]) -> PilotTimeSeries {
    let records: Vec<DutyRecord> = (0..len)
        .filter(|n| !off.contains(n))
        .map(|n| duty(n, "08:00", "16:00"))
        .collect();
    create_test_series(records)
}
