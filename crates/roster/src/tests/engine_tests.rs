// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_catalog, create_test_grid, dates, day, staff};
use crate::{
    DutyCodeCatalog, MAX_ROSTER_DATES, RosterEntry, RosterError, RosterGrid, RosterRule, StaffId,
    ValidationRule, revalidate_staff, validate_roster,
};
use time::Date;

fn max_consecutive(days: u32) -> ValidationRule {
    ValidationRule::new(RosterRule::MaxConsecutiveDuty { days })
}

fn min_off(period: u32, days: u32) -> ValidationRule {
    ValidationRule::new(RosterRule::MinOffDaysInPeriod { period, days })
}

fn min_consecutive_off(period: u32, consecutive_days: u32) -> ValidationRule {
    ValidationRule::new(RosterRule::MinConsecutiveOffDaysInPeriod {
        period,
        consecutive_days,
    })
}

fn validate(grid: &RosterGrid, names: &[&str], len: i64, rules: &[ValidationRule]) -> RosterGrid {
    let members: Vec<StaffId> = names.iter().map(|name| staff(name)).collect();
    let catalog: DutyCodeCatalog = create_test_catalog();
    validate_roster(grid, &members, &dates(len), &catalog, rules).unwrap()
}

#[test]
fn test_max_consecutive_duty_flags_each_day_past_the_limit() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDD-D")]);

    let result: RosterGrid = validate(&grid, &["alice"], 7, &[max_consecutive(3)]);
    let alice: StaffId = staff("alice");

    assert_eq!(result.violation(day(2), &alice), None);
    assert_eq!(
        result.violation(day(3), &alice),
        Some("Exceeds maximum of 3 consecutive duty days (Day 4 of 3)")
    );
    assert_eq!(
        result.violation(day(4), &alice),
        Some("Exceeds maximum of 3 consecutive duty days (Day 5 of 3)")
    );
    assert_eq!(result.violation(day(6), &alice), None);
    assert_eq!(result.violation_count(), 2);
}

#[test]
fn test_off_duty_code_resets_the_duty_run() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDODDDLDDD")]);

    let result: RosterGrid = validate(&grid, &["alice"], 10, &[max_consecutive(3)]);

    assert_eq!(result.violation_count(), 0);
}

#[test]
fn test_unknown_duty_code_counts_as_duty() {
    let grid: RosterGrid = create_test_grid(&[("alice", "XXXX")]);

    let result: RosterGrid = validate(&grid, &["alice"], 4, &[max_consecutive(3)]);

    assert_eq!(
        result.violation(day(3), &staff("alice")),
        Some("Exceeds maximum of 3 consecutive duty days (Day 4 of 3)")
    );
}

#[test]
fn test_min_off_days_counts_the_trailing_window() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDDD-")]);

    let result: RosterGrid = validate(&grid, &["alice"], 7, &[min_off(7, 2)]);
    let alice: StaffId = staff("alice");

    // Days before the roster are empty, so early windows have enough days off.
    assert_eq!(result.violation(day(4), &alice), None);
    assert_eq!(
        result.violation(day(5), &alice),
        Some("Requires at least 2 days off in 7 days (1 of 2 days off)")
    );
    assert_eq!(
        result.violation(day(6), &alice),
        Some("Requires at least 2 days off in 7 days (1 of 2 days off)")
    );
}

#[test]
fn test_violation_on_empty_cell_creates_entry() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDDD-")]);

    let result: RosterGrid = validate(&grid, &["alice"], 7, &[min_off(7, 2)]);
    let entry: &RosterEntry = result.entry(day(6), &staff("alice")).unwrap();

    assert_eq!(entry.duty_code_id, None);
    assert!(entry.violation.is_some());
}

#[test]
fn test_min_consecutive_off_days_tracks_longest_run() {
    let grid: RosterGrid = create_test_grid(&[("alice", "-DDDDDD-D")]);

    let result: RosterGrid = validate(&grid, &["alice"], 9, &[min_consecutive_off(7, 2)]);
    let alice: StaffId = staff("alice");

    assert_eq!(result.violation(day(5), &alice), None);
    for n in 6..=8 {
        assert_eq!(
            result.violation(day(n), &alice),
            Some(
                "Requires at least 2 consecutive days off in 7 days \
                 (longest 1 of 2 consecutive days off)"
            )
        );
    }
    assert_eq!(result.violation_count(), 3);
}

#[test]
fn test_first_rule_message_wins_per_cell() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDDD-")]);
    let alice: StaffId = staff("alice");

    let off_first: RosterGrid =
        validate(&grid, &["alice"], 7, &[min_off(7, 2), max_consecutive(3)]);
    let run_first: RosterGrid =
        validate(&grid, &["alice"], 7, &[max_consecutive(3), min_off(7, 2)]);

    assert_eq!(
        off_first.violation(day(5), &alice),
        Some("Requires at least 2 days off in 7 days (1 of 2 days off)")
    );
    assert_eq!(
        run_first.violation(day(5), &alice),
        Some("Exceeds maximum of 3 consecutive duty days (Day 6 of 3)")
    );
}

#[test]
fn test_validation_does_not_mutate_input() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDD")]);
    let before: RosterGrid = grid.clone();

    let result: RosterGrid = validate(&grid, &["alice"], 5, &[max_consecutive(2)]);

    assert_eq!(grid, before);
    assert_ne!(result, before);
}

#[test]
fn test_full_validation_clears_stale_violations() {
    let mut grid: RosterGrid = create_test_grid(&[("alice", "DD")]);
    let mut entry: RosterEntry = RosterEntry::with_code("D");
    entry.violation = Some(String::from("old"));
    grid.insert(day(0), staff("alice"), entry);

    let result: RosterGrid = validate(&grid, &["alice"], 2, &[max_consecutive(3)]);

    assert_eq!(result.violation(day(0), &staff("alice")), None);
}

#[test]
fn test_validation_is_idempotent() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDDDDD"), ("bob", "DD-DDDDD")]);
    let rules: Vec<ValidationRule> = vec![max_consecutive(4), min_off(7, 2)];

    let once: RosterGrid = validate(&grid, &["alice", "bob"], 8, &rules);
    let twice: RosterGrid = validate(&once, &["alice", "bob"], 8, &rules);

    assert_eq!(once, twice);
}

#[test]
fn test_dates_are_sorted_and_deduplicated() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDD")]);
    let members: Vec<StaffId> = vec![staff("alice")];
    let catalog: DutyCodeCatalog = create_test_catalog();
    let shuffled: Vec<Date> = vec![day(4), day(0), day(2), day(1), day(3), day(2)];

    let result: RosterGrid = validate_roster(
        &grid,
        &members,
        &shuffled,
        &catalog,
        &[max_consecutive(3)],
    )
    .unwrap();

    assert_eq!(result, validate(&grid, &["alice"], 5, &[max_consecutive(3)]));
}

#[test]
fn test_revalidate_staff_clears_fixed_cells() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDDD"), ("bob", "DDDDD")]);
    let members: Vec<StaffId> = vec![staff("alice"), staff("bob")];
    let catalog: DutyCodeCatalog = create_test_catalog();
    let rules: Vec<ValidationRule> = vec![max_consecutive(3)];
    let validated: RosterGrid =
        validate_roster(&grid, &members, &dates(5), &catalog, &rules).unwrap();

    let mut edited: RosterGrid = validated.clone();
    let mut fixed: RosterEntry = edited.entry(day(2), &staff("alice")).cloned().unwrap();
    fixed.duty_code_id = Some(String::from("O"));
    edited.insert(day(2), staff("alice"), fixed);

    let result: RosterGrid =
        revalidate_staff(&edited, &members, &staff("alice"), &dates(5), &catalog, &rules).unwrap();

    for n in 0..5 {
        assert_eq!(result.violation(day(n), &staff("alice")), None);
    }
    assert_eq!(
        result.violation(day(3), &staff("bob")),
        Some("Exceeds maximum of 3 consecutive duty days (Day 4 of 3)")
    );
    assert_eq!(result.violation_count(), 2);
}

#[test]
fn test_revalidate_staff_leaves_other_staff_untouched() {
    let mut grid: RosterGrid = create_test_grid(&[("alice", "DDDD"), ("bob", "DDDD")]);
    let mut entry: RosterEntry = RosterEntry::with_code("D");
    entry.violation = Some(String::from("set by hand"));
    grid.insert(day(0), staff("bob"), entry);
    let members: Vec<StaffId> = vec![staff("alice"), staff("bob")];

    let result: RosterGrid = revalidate_staff(
        &grid,
        &members,
        &staff("alice"),
        &dates(4),
        &create_test_catalog(),
        &[max_consecutive(3)],
    )
    .unwrap();

    assert_eq!(result.violation(day(0), &staff("bob")), Some("set by hand"));
    assert_eq!(result.violation(day(3), &staff("bob")), None);
    assert!(result.violation(day(3), &staff("alice")).is_some());
}

#[test]
fn test_revalidate_unknown_staff_fails() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDD")]);

    let result = revalidate_staff(
        &grid,
        &[staff("alice")],
        &staff("zed"),
        &dates(4),
        &create_test_catalog(),
        &[max_consecutive(3)],
    );

    assert_eq!(result, Err(RosterError::UnknownStaff(staff("zed"))));
}

#[test]
fn test_invalid_rule_is_rejected_before_evaluation() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDD")]);

    let result = validate_roster(
        &grid,
        &[staff("alice")],
        &dates(4),
        &create_test_catalog(),
        &[max_consecutive(3), min_off(0, 1)],
    );

    assert!(matches!(result, Err(RosterError::InvalidRule { .. })));
}

#[test]
fn test_oversized_rule_window_is_rejected_before_evaluation() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DDDD")]);

    let result = validate_roster(
        &grid,
        &[staff("alice")],
        &dates(4),
        &create_test_catalog(),
        &[min_off(50_000_000, 1)],
    );

    assert!(matches!(result, Err(RosterError::InvalidRule { .. })));
}

#[test]
fn test_date_list_is_capped() {
    let grid: RosterGrid = RosterGrid::new();
    let too_many: i64 = i64::try_from(MAX_ROSTER_DATES).unwrap() + 1;

    let result = validate_roster(
        &grid,
        &[staff("alice")],
        &dates(too_many),
        &create_test_catalog(),
        &[max_consecutive(3)],
    );

    assert_eq!(
        result,
        Err(RosterError::PeriodTooLong {
            dates: MAX_ROSTER_DATES + 1,
            max: MAX_ROSTER_DATES,
        })
    );
}

#[test]
fn test_no_rules_clears_every_violation() {
    let mut grid: RosterGrid = create_test_grid(&[("alice", "D")]);
    let mut entry: RosterEntry = RosterEntry::with_code("D");
    entry.violation = Some(String::from("old"));
    grid.insert(day(0), staff("alice"), entry);

    let result: RosterGrid = validate(&grid, &["alice"], 1, &[]);

    assert_eq!(result.violation_count(), 0);
}
