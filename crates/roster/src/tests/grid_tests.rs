// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_catalog, create_test_grid, day, staff};
use crate::{CellKey, DutyCodeCatalog, RosterEntry, RosterGrid};
use std::collections::BTreeMap;

#[test]
fn test_empty_and_missing_cells_are_off_duty() {
    let catalog: DutyCodeCatalog = create_test_catalog();

    assert!(catalog.is_off_duty(None));
    assert!(catalog.is_off_duty(Some("O")));
    assert!(catalog.is_off_duty(Some("L")));
    assert!(!catalog.is_off_duty(Some("D")));
}

#[test]
fn test_unknown_duty_code_is_on_duty() {
    let catalog: DutyCodeCatalog = create_test_catalog();

    assert!(!catalog.is_off_duty(Some("NIGHT")));
}

#[test]
fn test_blank_duty_code_reads_as_empty() {
    let mut grid: RosterGrid = RosterGrid::new();
    grid.insert(day(0), staff("alice"), RosterEntry::with_code("  "));

    assert_eq!(grid.duty_code(day(0), &staff("alice")), None);
    assert_eq!(grid.duty_code(day(1), &staff("alice")), None);
}

#[test]
fn test_with_violations_leaves_receiver_untouched() {
    let grid: RosterGrid = create_test_grid(&[("alice", "DD")]);
    let mut violations: BTreeMap<CellKey, String> = BTreeMap::new();
    violations.insert((day(1), staff("alice")), String::from("too many"));

    let next: RosterGrid = grid.with_violations(|_| true, violations);

    assert_eq!(grid.violation_count(), 0);
    assert_eq!(next.violation(day(1), &staff("alice")), Some("too many"));
    assert_eq!(next.violation_count(), 1);
}

#[test]
fn test_with_violations_clears_only_scoped_staff() {
    let mut grid: RosterGrid = create_test_grid(&[("alice", "D"), ("bob", "D")]);
    for name in ["alice", "bob"] {
        let mut entry: RosterEntry = RosterEntry::with_code("D");
        entry.violation = Some(String::from("stale"));
        grid.insert(day(0), staff(name), entry);
    }

    let next: RosterGrid = grid.with_violations(|member| member.value() == "alice", BTreeMap::new());

    assert_eq!(next.violation(day(0), &staff("alice")), None);
    assert_eq!(next.violation(day(0), &staff("bob")), Some("stale"));
}

#[test]
fn test_with_violations_creates_absent_cells() {
    let grid: RosterGrid = RosterGrid::new();
    let mut violations: BTreeMap<CellKey, String> = BTreeMap::new();
    violations.insert((day(3), staff("carol")), String::from("needs a day off"));

    let next: RosterGrid = grid.with_violations(|_| true, violations);
    let entry: &RosterEntry = next.entry(day(3), &staff("carol")).unwrap();

    assert_eq!(entry.duty_code_id, None);
    assert_eq!(entry.violation.as_deref(), Some("needs a day off"));
}

#[test]
fn test_cells_iterate_in_date_then_staff_order() {
    let grid: RosterGrid = create_test_grid(&[("bob", "DD"), ("alice", "DD")]);

    let order: Vec<(i64, String)> = grid
        .cells()
        .map(|(date, member, _)| ((date - day(0)).whole_days(), member.to_string()))
        .collect();

    assert_eq!(
        order,
        vec![
            (0, String::from("alice")),
            (0, String::from("bob")),
            (1, String::from("alice")),
            (1, String::from("bob")),
        ]
    );
}

#[test]
fn test_dates_are_ascending_and_unique() {
    let mut grid: RosterGrid = create_test_grid(&[("bob", "D-D")]);
    grid.insert(day(0), staff("alice"), RosterEntry::with_code("O"));

    let found: Vec<time::Date> = grid.dates().collect();

    assert_eq!(found, vec![day(0), day(2)]);
}
