// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flight duty period limit lookup and exceedance check.

use crew_ftl_domain::{
    AircraftCategory, DutyRecord, FIXED_WING_MAX_FLIGHT_TIME, fixed_wing_max_fdp,
    helicopter_limits, parse_time_to_minutes, present,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Part of an in-duty break that does not count as rest, in hours.
const BREAK_ALLOWANCE_HOURS: f64 = 0.5;

/// Regulatory limits that apply to one duty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FdpLimit {
    /// Table maximum FDP before any split-duty extension.
    pub base_fdp: f64,
    /// Split-duty extension added to the base.
    pub fdp_extension: f64,
    /// Effective maximum FDP (`base_fdp + fdp_extension`).
    pub max_fdp: f64,
    /// Maximum flight time.
    pub max_flight_time: f64,
}

/// The time the FDP limit is keyed on: standby-on, else FDP start, else
/// duty start.
#[must_use]
pub fn reference_start(record: &DutyRecord) -> Option<&str> {
    present(record.standby_on.as_ref())
        .or_else(|| present(record.fdp_start.as_ref()))
        .or_else(|| present(record.duty_start.as_ref()))
}

/// Returns the FDP extension earned by a split duty.
///
/// The first half hour of the break is not counted. Helicopter duties gain
/// one hour for 2 to 3 hours of effective rest and half the rest beyond
/// that; fixed-wing duties gain half the rest once it reaches 3 hours.
#[must_use]
pub fn split_duty_extension(record: &DutyRecord, category: AircraftCategory) -> f64 {
    if !record.is_split_duty {
        return 0.0;
    }

    let break_hours: f64 = record.break_hours();
    if break_hours <= 0.0 {
        return 0.0;
    }

    let effective_rest: f64 = (break_hours - BREAK_ALLOWANCE_HOURS).max(0.0);
    match category {
        AircraftCategory::Helicopter if (2.0..=3.0).contains(&effective_rest) => 1.0,
        AircraftCategory::Helicopter if effective_rest > 3.0 => effective_rest / 2.0,
        AircraftCategory::FixedWing if effective_rest >= 3.0 => effective_rest / 2.0,
        _ => 0.0,
    }
}

/// Looks up the FDP and flight-time limits for a duty.
///
/// Returns an all-zero limit if the record has no reference start time or
/// the category is unknown.
///
/// # Arguments
///
/// * `record` - The duty to evaluate
/// * `category` - The pilot's aircraft category, if recognised
#[must_use]
pub fn calculate_fdp_limit(record: &DutyRecord, category: Option<AircraftCategory>) -> FdpLimit {
    let (Some(start), Some(category)) = (reference_start(record), category) else {
        return FdpLimit::default();
    };

    let start_minute: u32 = parse_time_to_minutes(start);
    let (base_fdp, max_flight_time): (f64, f64) = match category {
        AircraftCategory::Helicopter => {
            helicopter_limits(record.is_two_pilot, start_minute).unwrap_or((0.0, 0.0))
        }
        AircraftCategory::FixedWing => (
            fixed_wing_max_fdp(record.is_two_pilot, start_minute / 60, record.sectors),
            FIXED_WING_MAX_FLIGHT_TIME,
        ),
    };

    let fdp_extension: f64 = split_duty_extension(record, category);

    FdpLimit {
        base_fdp,
        fdp_extension,
        max_fdp: base_fdp + fdp_extension,
        max_flight_time,
    }
}

/// Result of comparing a duty against its FDP limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FdpVerdict {
    /// The applicable limits.
    pub limit: FdpLimit,
    /// Actual FDP: logged FDP span, else the duty span.
    pub actual_fdp_hours: f64,
    /// Actual flight hours.
    pub flight_hours: f64,
    /// Violation message, if a limit was exceeded.
    pub violation: Option<String>,
}

/// Compares a duty's actual FDP and flight time against its limits.
///
/// A zero limit (no start time or unknown category) never produces a
/// violation.
#[must_use]
pub fn check_fdp(record: &DutyRecord, category: Option<AircraftCategory>) -> FdpVerdict {
    let limit: FdpLimit = calculate_fdp_limit(record, category);

    let logged_fdp: f64 = record.fdp_hours();
    let actual_fdp_hours: f64 = if logged_fdp > 0.0 {
        logged_fdp
    } else {
        record.duty_hours()
    };
    let flight_hours: f64 = record.flight_hours();

    let violation: Option<String> = if limit.max_fdp <= 0.0 {
        None
    } else if actual_fdp_hours > limit.max_fdp {
        Some(format!(
            "FDP of {actual_fdp_hours:.1}h exceeds maximum {:.1}h",
            limit.max_fdp
        ))
    } else if flight_hours > limit.max_flight_time {
        Some(format!(
            "Flight time of {flight_hours:.1}h exceeds maximum {:.1}h",
            limit.max_flight_time
        ))
    } else {
        None
    };

    debug!(
        date = ?record.date,
        max_fdp = limit.max_fdp,
        actual_fdp_hours,
        flight_hours,
        violated = violation.is_some(),
        "Evaluated FDP limit"
    );

    FdpVerdict {
        limit,
        actual_fdp_hours,
        flight_hours,
        violation,
    }
}
