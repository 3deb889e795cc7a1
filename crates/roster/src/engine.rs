// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster rule evaluation.
//!
//! Validation never touches its input grid. Each run collects the messages
//! for the staff members in scope, then asks the grid for a new snapshot
//! with exactly those staff members' violations replaced.
//!
//! When several rules flag the same cell, the message from the rule listed
//! first is kept and later ones are dropped.

use crate::error::RosterError;
use crate::grid::{CellKey, DutyCodeCatalog, RosterGrid, StaffId};
use crate::rules::{RosterRule, ValidationRule};
use crew_ftl_domain::{days_after, trailing_window};
use std::collections::BTreeMap;
use time::Date;
use tracing::{debug, info, warn};

/// Most distinct dates a single validation run accepts.
pub const MAX_ROSTER_DATES: usize = 366;

/// Validates every staff member on the staff roster.
///
/// Violations are cleared across the whole grid before the new ones are
/// written, so a second run over unchanged input yields the same grid.
///
/// # Arguments
///
/// * `grid` - The current roster
/// * `staff` - Staff members to validate
/// * `dates` - Dates to validate, in any order
/// * `catalog` - Duty codes with their off-duty flags
/// * `rules` - Department rules in priority order
///
/// # Errors
///
/// Returns an error if a rule is invalid or more than
/// [`MAX_ROSTER_DATES`] distinct dates are supplied.
pub fn validate_roster(
    grid: &RosterGrid,
    staff: &[StaffId],
    dates: &[Date],
    catalog: &DutyCodeCatalog,
    rules: &[ValidationRule],
) -> Result<RosterGrid, RosterError> {
    let dates: Vec<Date> = prepare(dates, rules)?;

    let mut violations: BTreeMap<CellKey, String> = BTreeMap::new();
    for member in staff {
        collect_violations(grid, member, &dates, catalog, rules, &mut violations);
    }

    let violation_count: usize = violations.len();
    let validated: RosterGrid = grid.with_violations(|_| true, violations);

    info!(
        staff = staff.len(),
        dates = dates.len(),
        rules = rules.len(),
        violation_count,
        "Validated roster"
    );

    Ok(validated)
}

/// Revalidates one staff member, leaving everyone else's cells untouched.
///
/// The member's existing violations are cleared on every date in the grid
/// before the rules run again, so a fixed cell loses its stale message.
///
/// # Errors
///
/// Returns an error if `staff_id` is not on `staff`, a rule is invalid,
/// or more than [`MAX_ROSTER_DATES`] distinct dates are supplied.
pub fn revalidate_staff(
    grid: &RosterGrid,
    staff: &[StaffId],
    staff_id: &StaffId,
    dates: &[Date],
    catalog: &DutyCodeCatalog,
    rules: &[ValidationRule],
) -> Result<RosterGrid, RosterError> {
    if !staff.contains(staff_id) {
        return Err(RosterError::UnknownStaff(staff_id.clone()));
    }
    let dates: Vec<Date> = prepare(dates, rules)?;

    let mut violations: BTreeMap<CellKey, String> = BTreeMap::new();
    collect_violations(grid, staff_id, &dates, catalog, rules, &mut violations);

    let violation_count: usize = violations.len();
    let validated: RosterGrid = grid.with_violations(|member| member == staff_id, violations);

    info!(
        staff_id = %staff_id,
        dates = dates.len(),
        rules = rules.len(),
        violation_count,
        "Revalidated staff member"
    );

    Ok(validated)
}

/// Checks the rules and returns the dates sorted and deduplicated.
fn prepare(dates: &[Date], rules: &[ValidationRule]) -> Result<Vec<Date>, RosterError> {
    for rule in rules {
        rule.rule.validate()?;
    }

    let mut sorted: Vec<Date> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    if sorted.len() > MAX_ROSTER_DATES {
        return Err(RosterError::PeriodTooLong {
            dates: sorted.len(),
            max: MAX_ROSTER_DATES,
        });
    }

    Ok(sorted)
}

/// Runs every rule for one staff member, keeping the first message per cell.
fn collect_violations(
    grid: &RosterGrid,
    member: &StaffId,
    dates: &[Date],
    catalog: &DutyCodeCatalog,
    rules: &[ValidationRule],
    violations: &mut BTreeMap<CellKey, String>,
) {
    let lookback: u32 = rules
        .iter()
        .map(|rule| match rule.rule {
            RosterRule::MaxConsecutiveDuty { .. } => 1,
            RosterRule::MinOffDaysInPeriod { period, .. }
            | RosterRule::MinConsecutiveOffDaysInPeriod { period, .. } => period,
        })
        .max()
        .unwrap_or(1);
    let off_days: BTreeMap<Date, bool> = off_duty_days(grid, catalog, member, dates, lookback);
    let off_duty = |date: Date| -> bool { off_days.get(&date).copied().unwrap_or(true) };

    for rule in rules {
        let flagged: Vec<(Date, String)> = match rule.rule {
            RosterRule::MaxConsecutiveDuty { days } => max_consecutive_duty(dates, days, &off_duty),
            RosterRule::MinOffDaysInPeriod { period, days } => {
                min_off_days(dates, period, days, &off_duty)
            }
            RosterRule::MinConsecutiveOffDaysInPeriod {
                period,
                consecutive_days,
            } => min_consecutive_off_days(dates, period, consecutive_days, &off_duty),
        };

        debug!(
            staff_id = %member,
            rule = rule.rule.type_name(),
            flagged = flagged.len(),
            "Evaluated roster rule"
        );

        for (date, detail) in flagged {
            violations
                .entry((date, member.clone()))
                .or_insert_with(|| rule.message(&detail));
        }
    }
}

/// Classifies every calendar day from `lookback - 1` days before the first
/// date through the last date.
///
/// Empty cells are off duty. Unknown duty code ids are on duty.
fn off_duty_days(
    grid: &RosterGrid,
    catalog: &DutyCodeCatalog,
    member: &StaffId,
    dates: &[Date],
    lookback: u32,
) -> BTreeMap<Date, bool> {
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return BTreeMap::new();
    };
    let (start, _) = trailing_window(*first, lookback);
    let span: i64 = (*last - start).whole_days();

    (0..=span)
        .map(|offset| {
            let date: Date = days_after(start, offset);
            let code: Option<&str> = grid.duty_code(date, member);
            if let Some(id) = code.filter(|id| catalog.get(id).is_none()) {
                warn!(
                    staff_id = %member,
                    %date,
                    duty_code_id = id,
                    "Unknown duty code treated as on duty"
                );
            }
            (date, catalog.is_off_duty(code))
        })
        .collect()
}

/// Flags each date where the current duty run is longer than `max_days`.
///
/// The run is counted over the supplied date list and restarts at any
/// off-duty day.
fn max_consecutive_duty<F>(dates: &[Date], max_days: u32, off_duty: &F) -> Vec<(Date, String)>
where
    F: Fn(Date) -> bool,
{
    let mut run: u32 = 0;
    let mut flagged: Vec<(Date, String)> = Vec::new();

    for date in dates {
        if off_duty(*date) {
            run = 0;
            continue;
        }
        run += 1;
        if run > max_days {
            flagged.push((*date, format!("(Day {run} of {max_days})")));
        }
    }

    flagged
}

/// Flags each date whose trailing `period`-day window holds fewer than
/// `required` off-duty days.
fn min_off_days<F>(dates: &[Date], period: u32, required: u32, off_duty: &F) -> Vec<(Date, String)>
where
    F: Fn(Date) -> bool,
{
    dates
        .iter()
        .filter_map(|date| {
            let off_count: u32 = window_days(*date, period)
                .filter(|day| off_duty(*day))
                .map(|_| 1)
                .sum();
            (off_count < required)
                .then(|| (*date, format!("({off_count} of {required} days off)")))
        })
        .collect()
}

/// Flags each date whose trailing `period`-day window has no off-duty run
/// of at least `required` days.
fn min_consecutive_off_days<F>(
    dates: &[Date],
    period: u32,
    required: u32,
    off_duty: &F,
) -> Vec<(Date, String)>
where
    F: Fn(Date) -> bool,
{
    dates
        .iter()
        .filter_map(|date| {
            let mut current: u32 = 0;
            let mut longest: u32 = 0;
            for day in window_days(*date, period) {
                if off_duty(day) {
                    current += 1;
                    longest = longest.max(current);
                } else {
                    current = 0;
                }
            }
            (longest < required).then(|| {
                (
                    *date,
                    format!("(longest {longest} of {required} consecutive days off)"),
                )
            })
        })
        .collect()
}

/// Iterates the calendar days of the window ending on `target`, oldest first.
fn window_days(target: Date, period: u32) -> impl Iterator<Item = Date> {
    let (start, _) = trailing_window(target, period);
    (0..i64::from(period.max(1))).map(move |offset| days_after(start, offset))
}
