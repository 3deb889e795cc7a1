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

mod error;
mod fdp_table;
mod limits;
mod template;
mod time_math;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use fdp_table::{
    FIXED_WING_MAX_FLIGHT_TIME, HelicopterFdpRow, fixed_wing_max_fdp, helicopter_limits,
    single_pilot_sector_index, two_pilot_sector_index,
};
pub use limits::FtlLimits;
pub use template::fill_template;
pub use time_math::{
    MINUTES_PER_DAY, days_after, days_before, decimal_to_time, duration_hours, duration_minutes,
    instant_minutes, minutes_to_hours, parse_date, parse_time_to_minutes, time_to_decimal,
    trailing_window,
};
pub use types::{
    AircraftCategory, DAY_OFF_REMARK, DutyRecord, PilotProfile, PilotTimeSeries, present,
};
