// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Trailing-window duty and flight totals.
//!
//! A window of N days ending on a target date covers
//! `[target - (N - 1), target]`, both ends inclusive.

use crew_ftl_domain::{DutyRecord, PilotTimeSeries, trailing_window};
use serde::{Deserialize, Serialize};
use time::Date;

/// The window lengths reported by [`compute_rolling_totals`].
pub const ROLLING_WINDOWS: [u32; 6] = [3, 7, 14, 28, 90, 365];

/// Hours accumulated over one trailing window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSum {
    /// Duty hours, counting standby at half weight.
    pub duty_hours: f64,
    /// Flight hours.
    pub flight_hours: f64,
    /// Flight duty period hours.
    pub fdp_hours: f64,
}

/// Duty and flight totals for the fixed set of trailing windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollingTotals {
    /// Duty hours in the last 3 days.
    pub duty_3_days: f64,
    /// Duty hours in the last 7 days.
    pub duty_7_days: f64,
    /// Duty hours in the last 14 days.
    pub duty_14_days: f64,
    /// Duty hours in the last 28 days.
    pub duty_28_days: f64,
    /// Duty hours in the last 90 days.
    pub duty_90_days: f64,
    /// Duty hours in the last 365 days.
    pub duty_365_days: f64,
    /// Flight hours in the last 3 days.
    pub flight_3_days: f64,
    /// Flight hours in the last 7 days.
    pub flight_7_days: f64,
    /// Flight hours in the last 14 days.
    pub flight_14_days: f64,
    /// Flight hours in the last 28 days.
    pub flight_28_days: f64,
    /// Flight hours in the last 90 days.
    pub flight_90_days: f64,
    /// Flight hours in the last 365 days.
    pub flight_365_days: f64,
    /// Flight duty period hours in the last 14 days.
    pub fdp_14_days: f64,
}

impl RollingTotals {
    /// Returns the duty total for one of the fixed windows.
    #[must_use]
    pub const fn duty_hours(&self, days: u32) -> Option<f64> {
        match days {
            3 => Some(self.duty_3_days),
            7 => Some(self.duty_7_days),
            14 => Some(self.duty_14_days),
            28 => Some(self.duty_28_days),
            90 => Some(self.duty_90_days),
            365 => Some(self.duty_365_days),
            _ => None,
        }
    }

    /// Returns the flight total for one of the fixed windows.
    #[must_use]
    pub const fn flight_hours(&self, days: u32) -> Option<f64> {
        match days {
            3 => Some(self.flight_3_days),
            7 => Some(self.flight_7_days),
            14 => Some(self.flight_14_days),
            28 => Some(self.flight_28_days),
            90 => Some(self.flight_90_days),
            365 => Some(self.flight_365_days),
            _ => None,
        }
    }
}

/// FDP hours a record contributes: the logged FDP if present, else its
/// weighted duty hours.
#[must_use]
pub fn record_fdp_hours(record: &DutyRecord) -> f64 {
    let logged: f64 = record.fdp_hours();
    if logged > 0.0 {
        logged
    } else {
        record.weighted_duty_hours()
    }
}

/// Sums duty, flight and FDP hours over the `days`-day window ending on
/// `target`.
#[must_use]
pub fn sum_window(series: &PilotTimeSeries, target: Date, days: u32) -> WindowSum {
    let (from, to) = trailing_window(target, days);

    series
        .between(from, to)
        .iter()
        .fold(WindowSum::default(), |acc, (_, record)| WindowSum {
            duty_hours: acc.duty_hours + record.weighted_duty_hours(),
            flight_hours: acc.flight_hours + record.flight_hours(),
            fdp_hours: acc.fdp_hours + record_fdp_hours(record),
        })
}

/// Computes the fixed set of trailing totals ending on `target`.
///
/// # Arguments
///
/// * `series` - The pilot's duty records
/// * `target` - The last day of every window
#[must_use]
pub fn compute_rolling_totals(series: &PilotTimeSeries, target: Date) -> RollingTotals {
    let [d3, d7, d14, d28, d90, d365]: [WindowSum; 6] =
        ROLLING_WINDOWS.map(|days| sum_window(series, target, days));

    RollingTotals {
        duty_3_days: d3.duty_hours,
        duty_7_days: d7.duty_hours,
        duty_14_days: d14.duty_hours,
        duty_28_days: d28.duty_hours,
        duty_90_days: d90.duty_hours,
        duty_365_days: d365.duty_hours,
        flight_3_days: d3.flight_hours,
        flight_7_days: d7.flight_hours,
        flight_14_days: d14.flight_hours,
        flight_28_days: d28.flight_hours,
        flight_90_days: d90.flight_hours,
        flight_365_days: d365.flight_hours,
        fdp_14_days: d14.fdp_hours,
    }
}
