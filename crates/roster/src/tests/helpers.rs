// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DutyCode, DutyCodeCatalog, RosterEntry, RosterGrid, StaffId};
use crew_ftl_domain::days_after;
use time::Date;
use time::macros::date;

/// First date of every test roster.
pub const BASE_DATE: Date = date!(2026 - 03 - 01);

pub fn day(n: i64) -> Date {
    days_after(BASE_DATE, n)
}

/// Returns `len` consecutive dates from `BASE_DATE`.
pub fn dates(len: i64) -> Vec<Date> {
    (0..len).map(day).collect()
}

pub fn staff(name: &str) -> StaffId {
    StaffId::new(name)
}

/// `D` is on duty, `O` is off duty, `L` is leave (off duty).
pub fn create_test_catalog() -> DutyCodeCatalog {
    DutyCodeCatalog::new(vec![
        DutyCode {
            id: String::from("D"),
            code: String::from("DAY"),
            is_off_duty: false,
        },
        DutyCode {
            id: String::from("O"),
            code: String::from("OFF"),
            is_off_duty: true,
        },
        DutyCode {
            id: String::from("L"),
            code: String::from("LV"),
            is_off_duty: true,
        },
    ])
}

/// Writes a day pattern for one staff member starting at `BASE_DATE`.
///
/// `-` leaves the cell empty; any other character becomes the duty code id.
/// Existing violations and notes on rewritten cells are kept, and `-` over
/// an existing cell clears its duty code.
pub fn apply_pattern(grid: &mut RosterGrid, member: &StaffId, pattern: &str) {
    for (i, c) in pattern.chars().enumerate() {
        let date: Date = day(i64::try_from(i).unwrap());
        let existing: Option<RosterEntry> = grid.entry(date, member).cloned();
        if c == '-' && existing.is_none() {
            continue;
        }
        let mut entry: RosterEntry = existing.unwrap_or_default();
        entry.duty_code_id = (c != '-').then(|| c.to_string());
        grid.insert(date, member.clone(), entry);
    }
}

/// Builds a grid from `(staff, pattern)` pairs.
pub fn create_test_grid(patterns: &[(&str, &str)]) -> RosterGrid {
    let mut grid: RosterGrid = RosterGrid::new();
    for (name, pattern) in patterns {
        apply_pattern(&mut grid, &staff(name), pattern);
    }
    grid
}
