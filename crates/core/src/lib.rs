// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod compliance;
mod cumulative;
mod days_off;
mod disruptive;
mod error;
mod fdp;
mod rest;
mod rolling;
mod standby;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use compliance::{DailyCompliance, MAX_PERIOD_DAYS, evaluate_day, evaluate_period};
pub use cumulative::{CumulativeFinding, CumulativeKind, check_cumulative_limits};
pub use days_off::{DaysOffVerdict, check_days_off};
pub use disruptive::{DisruptiveVerdict, check_disruptive, is_disruptive};
pub use error::CoreError;
pub use fdp::{
    FdpLimit, FdpVerdict, calculate_fdp_limit, check_fdp, reference_start, split_duty_extension,
};
pub use rest::{RestVerdict, check_rest};
pub use rolling::{
    ROLLING_WINDOWS, RollingTotals, WindowSum, compute_rolling_totals, record_fdp_hours,
    sum_window,
};
pub use standby::{StandbyVerdict, check_standby};
