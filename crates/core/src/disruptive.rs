// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Disruptive duty tracking.
//!
//! A duty is disruptive when it touches the window of circadian low (WOCL).
//! Runs of disruptive duties are broken only by a long enough rest.

use crew_ftl_domain::{
    DutyRecord, FtlLimits, MINUTES_PER_DAY, PilotTimeSeries, instant_minutes, minutes_to_hours,
    parse_time_to_minutes, present, trailing_window,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

/// Returns whether a duty overlaps the WOCL.
///
/// A duty ending before it starts crosses midnight and is disruptive when
/// its end time falls inside the WOCL. A same-day duty is disruptive when it
/// starts or ends inside the WOCL, or spans the whole band.
#[must_use]
pub fn is_disruptive(record: &DutyRecord, limits: &FtlLimits) -> bool {
    let (Some(start), Some(end)) = (
        present(record.duty_start.as_ref()),
        present(record.duty_end.as_ref()),
    ) else {
        return false;
    };

    let start_minute: u32 = parse_time_to_minutes(start);
    let end_minute: u32 = parse_time_to_minutes(end);

    if end_minute < start_minute {
        return limits.in_wocl(end_minute);
    }

    limits.in_wocl(start_minute)
        || limits.in_wocl(end_minute)
        || (start_minute <= limits.wocl_start_minute && end_minute >= limits.wocl_end_minute)
}

/// Disruptive duty counts for a target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisruptiveVerdict {
    /// Length of the run of consecutive disruptive duties ending on the
    /// target date.
    pub consecutive_count: u32,
    /// Disruptive duties in the 7 days ending on the target date.
    pub count_in_7_days: u32,
    /// Violation message, if a limit was exceeded.
    pub violation: Option<String>,
}

fn duty_on_minutes(date: Date, record: &DutyRecord) -> i64 {
    let start: u32 = present(record.duty_start.as_ref()).map_or(0, parse_time_to_minutes);
    instant_minutes(date, start)
}

fn duty_off_minutes(date: Date, record: &DutyRecord) -> i64 {
    let start: u32 = present(record.duty_start.as_ref()).map_or(0, parse_time_to_minutes);
    let end: u32 = present(record.duty_end.as_ref()).map_or(0, parse_time_to_minutes);
    let rollover: u32 = if end < start { MINUTES_PER_DAY } else { 0 };
    instant_minutes(date, end + rollover)
}

/// Counts disruptive duties for the target date.
///
/// Returns `None` if the duty on the target date is not disruptive. Two
/// disruptive duties belong to the same run when the rest between the first
/// one's end and the next one's start is shorter than the reset rest.
///
/// # Arguments
///
/// * `series` - The pilot's duty records
/// * `target` - The date to evaluate
/// * `limits` - WOCL band, reset rest and maximum counts
#[must_use]
pub fn check_disruptive(
    series: &PilotTimeSeries,
    target: Date,
    limits: &FtlLimits,
) -> Option<DisruptiveVerdict> {
    let current: &DutyRecord = series.record_on(target)?;
    if !is_disruptive(current, limits) {
        return None;
    }

    let disruptive: Vec<(Date, &DutyRecord)> = series
        .up_to(target)
        .iter()
        .filter(|(_, record)| is_disruptive(record, limits))
        .map(|(date, record)| (*date, record))
        .collect();

    let mut consecutive_count: u32 = 1;
    let mut later: (Date, &DutyRecord) = (target, current);
    for earlier in disruptive.iter().rev().skip(1) {
        let rest_minutes: i64 =
            duty_on_minutes(later.0, later.1) - duty_off_minutes(earlier.0, earlier.1);
        if minutes_to_hours(rest_minutes) >= limits.disruptive_reset_rest_hours {
            break;
        }
        consecutive_count += 1;
        later = *earlier;
    }

    let (from, to) = trailing_window(target, 7);
    let count_in_7_days: u32 = u32::try_from(
        disruptive
            .iter()
            .filter(|(date, _)| *date >= from && *date <= to)
            .count(),
    )
    .unwrap_or(u32::MAX);

    let violation: Option<String> = if consecutive_count > limits.max_consecutive_disruptive {
        Some(format!(
            "{consecutive_count} consecutive disruptive duties (maximum {})",
            limits.max_consecutive_disruptive
        ))
    } else if count_in_7_days > limits.max_disruptive_in_7_days {
        Some(format!(
            "{count_in_7_days} disruptive duties in 7 days (maximum {})",
            limits.max_disruptive_in_7_days
        ))
    } else {
        None
    };

    debug!(
        %target,
        consecutive_count,
        count_in_7_days,
        violated = violation.is_some(),
        "Evaluated disruptive duties"
    );

    Some(DisruptiveVerdict {
        consecutive_count,
        count_in_7_days,
        violation,
    })
}
