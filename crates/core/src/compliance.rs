// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily compliance evaluation.
//!
//! Runs every per-pilot check for a date and gathers the verdicts into one
//! record. The checks are independent of each other; this module only
//! sequences them and collects their messages.

use crate::cumulative::{CumulativeFinding, check_cumulative_limits};
use crate::days_off::{DaysOffVerdict, check_days_off};
use crate::disruptive::{DisruptiveVerdict, check_disruptive};
use crate::error::CoreError;
use crate::fdp::{FdpVerdict, check_fdp};
use crate::rest::{RestVerdict, check_rest};
use crate::rolling::{RollingTotals, compute_rolling_totals};
use crate::standby::{StandbyVerdict, check_standby};
use crew_ftl_domain::{
    DomainError, DutyRecord, FtlLimits, PilotProfile, PilotTimeSeries, days_after,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::info;

/// Longest date range [`evaluate_period`] accepts, in days.
pub const MAX_PERIOD_DAYS: i64 = 366;

/// Every verdict for one pilot on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCompliance {
    /// The evaluated date.
    pub date: Date,
    /// Whether the date is a day off.
    pub is_off_day: bool,
    /// Trailing duty and flight totals.
    pub totals: RollingTotals,
    /// FDP limit and exceedance.
    pub fdp: FdpVerdict,
    /// Disruptive duty counts; `None` when the duty is not disruptive.
    pub disruptive: Option<DisruptiveVerdict>,
    /// Rest before the shift.
    pub rest: RestVerdict,
    /// Days-off rules.
    pub days_off: DaysOffVerdict,
    /// Standby length.
    pub standby: StandbyVerdict,
    /// Exceeded cumulative limits.
    pub cumulative: Vec<CumulativeFinding>,
    /// All violation messages, in check order.
    pub violations: Vec<String>,
}

impl DailyCompliance {
    /// Returns whether any check reported a violation.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluates every check for one pilot on one date.
///
/// # Arguments
///
/// * `series` - The pilot's duty records
/// * `target` - The date to evaluate
/// * `profile` - The pilot's aircraft category
/// * `limits` - Thresholds for every check
#[must_use]
pub fn evaluate_day(
    series: &PilotTimeSeries,
    target: Date,
    profile: &PilotProfile,
    limits: &FtlLimits,
) -> DailyCompliance {
    let record: Option<&DutyRecord> = series.record_on(target);
    let empty: DutyRecord = DutyRecord::on(target);

    let totals: RollingTotals = compute_rolling_totals(series, target);
    let fdp: FdpVerdict = check_fdp(record.unwrap_or(&empty), profile.category);
    let disruptive: Option<DisruptiveVerdict> = check_disruptive(series, target, limits);
    let rest: RestVerdict = check_rest(series, target, limits);
    let days_off: DaysOffVerdict = check_days_off(series, target, profile.category, limits);
    let standby: StandbyVerdict = check_standby(record, limits);
    let cumulative: Vec<CumulativeFinding> = check_cumulative_limits(series, target, limits);

    let mut violations: Vec<String> = [
        fdp.violation.as_ref(),
        disruptive.as_ref().and_then(|d| d.violation.as_ref()),
        rest.violation.as_ref(),
        days_off.violation.as_ref(),
        standby.violation.as_ref(),
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect();
    violations.extend(cumulative.iter().map(CumulativeFinding::message));

    DailyCompliance {
        date: target,
        is_off_day: days_off.is_off_day,
        totals,
        fdp,
        disruptive,
        rest,
        days_off,
        standby,
        cumulative,
        violations,
    }
}

/// Evaluates every date in `[start, end]`.
///
/// # Errors
///
/// Returns an error if `end` precedes `start` or the range is longer than
/// [`MAX_PERIOD_DAYS`].
pub fn evaluate_period(
    series: &PilotTimeSeries,
    start: Date,
    end: Date,
    profile: &PilotProfile,
    limits: &FtlLimits,
) -> Result<Vec<DailyCompliance>, CoreError> {
    if end < start {
        return Err(DomainError::InvalidDateRange {
            start,
            end,
            reason: String::from("end precedes start"),
        }
        .into());
    }

    let span_days: i64 = (end - start).whole_days() + 1;
    if span_days > MAX_PERIOD_DAYS {
        return Err(DomainError::InvalidDateRange {
            start,
            end,
            reason: format!("range of {span_days} days exceeds {MAX_PERIOD_DAYS} days"),
        }
        .into());
    }

    let days: Vec<DailyCompliance> = (0..span_days)
        .map(|offset| evaluate_day(series, days_after(start, offset), profile, limits))
        .collect();

    let violating_days: usize = days.iter().filter(|day| !day.is_compliant()).count();
    info!(
        %start,
        %end,
        records = series.len(),
        violating_days,
        "Evaluated compliance period"
    );

    Ok(days)
}
