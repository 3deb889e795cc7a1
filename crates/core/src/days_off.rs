// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consecutive duty day and days-off rules.
//!
//! Rules are evaluated in a fixed order and only the first violation is
//! reported:
//!
//! 1. No more than the maximum consecutive duty days
//! 2. Two consecutive days off after a maximal duty run
//! 3. Minimum days off in 28 days
//! 4. Category rules over 14 days (helicopter: minimum days off, then a
//!    two-day block; fixed-wing: a two-day block only)

use crew_ftl_domain::{
    AircraftCategory, FtlLimits, PilotTimeSeries, days_after, days_before, trailing_window,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

/// Days-off state for a target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOffVerdict {
    /// Whether the target date is a day off.
    pub is_off_day: bool,
    /// On a duty day, the run of duty days ending on it. On a day off, the
    /// run of duty days immediately before it.
    pub consecutive_duty_days: u32,
    /// Days off in the 28 days ending on the target date.
    pub days_off_in_28: u32,
    /// Days off in the 14 days ending on the target date.
    pub days_off_in_14: u32,
    /// Whether the 14 days ending on the target date contain two
    /// consecutive days off.
    pub has_two_day_block_in_14: bool,
    /// The first violated rule, if any.
    pub violation: Option<String>,
}

fn count_off_days(series: &PilotTimeSeries, target: Date, days: u32) -> u32 {
    (0..i64::from(days))
        .map(|offset| days_before(target, offset))
        .fold(0, |count, date| count + u32::from(series.is_off_day(date)))
}

fn has_off_block(series: &PilotTimeSeries, target: Date, days: u32, block: u32) -> bool {
    let (from, _) = trailing_window(target, days);
    let mut run: u32 = 0;

    for offset in 0..i64::from(days) {
        if series.is_off_day(days_after(from, offset)) {
            run += 1;
            if run >= block {
                return true;
            }
        } else {
            run = 0;
        }
    }

    false
}

/// Counts consecutive duty days going back from `start`, looking at no more
/// than `cap` days.
fn count_duty_run(series: &PilotTimeSeries, start: Date, cap: u32) -> u32 {
    (0..i64::from(cap))
        .map(|offset| days_before(start, offset))
        .take_while(|date| !series.is_off_day(*date))
        .fold(0, |count, _| count + 1)
}

/// Evaluates the days-off rules for a target date.
///
/// # Arguments
///
/// * `series` - The pilot's duty records; missing dates are days off
/// * `target` - The date to evaluate
/// * `category` - Selects the 14-day rules; `None` skips them
/// * `limits` - Duty run and days-off thresholds
#[must_use]
pub fn check_days_off(
    series: &PilotTimeSeries,
    target: Date,
    category: Option<AircraftCategory>,
    limits: &FtlLimits,
) -> DaysOffVerdict {
    let max_run: u32 = limits.max_consecutive_duty_days;
    let is_off_day: bool = series.is_off_day(target);

    let mut violation: Option<String> = None;

    let consecutive_duty_days: u32 = if is_off_day {
        let preceding: u32 = count_duty_run(series, days_before(target, 1), max_run);
        let next_is_duty: bool = !series.is_off_day(days_after(target, 1));
        if preceding == max_run && next_is_duty {
            violation = Some(format!(
                "Requires 2 consecutive days off after {max_run} duty days"
            ));
        }
        preceding
    } else {
        let run: u32 = count_duty_run(series, target, max_run + 1);
        if run > max_run {
            violation = Some(format!("Exceeds {max_run} consecutive duty days"));
        }
        run
    };

    let days_off_in_28: u32 = count_off_days(series, target, 28);
    if violation.is_none() && days_off_in_28 < limits.min_days_off_in_28 {
        violation = Some(format!(
            "Only {days_off_in_28} days off in 28 days (minimum {})",
            limits.min_days_off_in_28
        ));
    }

    let days_off_in_14: u32 = count_off_days(series, target, 14);
    let has_two_day_block_in_14: bool = has_off_block(series, target, 14, 2);

    if violation.is_none() {
        let needs_min_days: bool = category == Some(AircraftCategory::Helicopter);
        let needs_block: bool = category.is_some();

        if needs_min_days && days_off_in_14 < limits.helicopter_min_days_off_in_14 {
            violation = Some(format!(
                "Only {days_off_in_14} days off in 14 days (minimum {})",
                limits.helicopter_min_days_off_in_14
            ));
        } else if needs_block && !has_two_day_block_in_14 {
            violation = Some(String::from("No 2 consecutive days off in 14 days"));
        }
    }

    debug!(
        %target,
        is_off_day,
        consecutive_duty_days,
        days_off_in_28,
        days_off_in_14,
        violated = violation.is_some(),
        "Evaluated days off"
    );

    DaysOffVerdict {
        is_off_day,
        consecutive_duty_days,
        days_off_in_28,
        days_off_in_14,
        has_two_day_block_in_14,
        violation,
    }
}
