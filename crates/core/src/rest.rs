// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rest period validation between consecutive shifts.

use crew_ftl_domain::{
    DutyRecord, FtlLimits, MINUTES_PER_DAY, PilotTimeSeries, duration_hours, instant_minutes,
    minutes_to_hours, parse_time_to_minutes,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

/// Rest between the previous shift and the one on the target date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestVerdict {
    /// Whether an earlier shift with an end time exists.
    pub has_history: bool,
    /// Hours between the previous shift end and the current shift start.
    pub rest_hours: f64,
    /// Rest required: the minimum rest or the previous shift length,
    /// whichever is longer.
    pub required_rest_hours: f64,
    /// Violation message, if rest was too short.
    pub violation: Option<String>,
}

/// Checks the rest before the shift on the target date.
///
/// The previous shift is the latest earlier record with a duty end or
/// standby-off. Its end rolls to the next calendar day when it precedes its
/// start. The current shift starts at standby-on, else duty start, else
/// midnight. A violation is only reported when the target date actually
/// starts a shift.
///
/// # Arguments
///
/// * `series` - The pilot's duty records
/// * `target` - The date of the shift to check
/// * `limits` - Provides the minimum rest
#[must_use]
pub fn check_rest(series: &PilotTimeSeries, target: Date, limits: &FtlLimits) -> RestVerdict {
    let Some((previous_date, previous)) = series.previous_with_end(target) else {
        return RestVerdict {
            has_history: false,
            rest_hours: 0.0,
            required_rest_hours: limits.min_rest_hours,
            violation: None,
        };
    };

    let previous_start: Option<&str> = previous.effective_start();
    let previous_end: &str = previous.effective_end().unwrap_or_default();

    let previous_length: f64 = previous_start.map_or(0.0, |start| duration_hours(start, previous_end));
    let required_rest_hours: f64 = limits.min_rest_hours.max(previous_length);

    let end_minute: u32 = parse_time_to_minutes(previous_end);
    let rolls_over: bool =
        previous_start.is_some_and(|start| end_minute < parse_time_to_minutes(start));
    let off_instant: i64 = instant_minutes(
        previous_date,
        end_minute + if rolls_over { MINUTES_PER_DAY } else { 0 },
    );

    let current: Option<&DutyRecord> = series.record_on(target);
    let current_start: &str = current
        .and_then(DutyRecord::effective_start)
        .unwrap_or("00:00");
    let on_instant: i64 = instant_minutes(target, parse_time_to_minutes(current_start));

    let rest_hours: f64 = minutes_to_hours(on_instant - off_instant);
    let starts_shift: bool = current.is_some_and(DutyRecord::starts_shift);

    let violation: Option<String> = (starts_shift && rest_hours < required_rest_hours).then(|| {
        format!("Insufficient rest: {rest_hours:.1}h (required {required_rest_hours:.1}h)")
    });

    debug!(
        %target,
        %previous_date,
        rest_hours,
        required_rest_hours,
        violated = violation.is_some(),
        "Evaluated rest period"
    );

    RestVerdict {
        has_history: true,
        rest_hours,
        required_rest_hours,
        violation,
    }
}
