// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The staff by date roster grid and the duty-code catalog.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use time::Date;

/// Identifies a staff member within a department roster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId {
    value: String,
}

impl StaffId {
    /// Creates a new `StaffId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One cell of the roster grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterEntry {
    /// The assigned duty code id. `None` is an empty, off-duty cell.
    pub duty_code_id: Option<String>,
    /// Violation message written by the rule engine.
    pub violation: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
    /// Display flags set by the roster editor.
    pub flags: Vec<String>,
}

impl RosterEntry {
    /// Creates an entry holding a duty code.
    #[must_use]
    pub fn with_code(duty_code_id: &str) -> Self {
        Self {
            duty_code_id: Some(duty_code_id.to_string()),
            ..Self::default()
        }
    }
}

/// Identifies a cell of the grid.
pub type CellKey = (Date, StaffId);

/// One date of the grid.
type RosterRow = BTreeMap<StaffId, RosterEntry>;

/// A department roster: date, then staff member, then entry.
///
/// A missing entry is equivalent to an empty, off-duty cell.
///
/// Rows are shared between a grid and the snapshots derived from it and are
/// copied on first write, so a snapshot only duplicates the dates it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterGrid {
    cells: BTreeMap<Date, Arc<RosterRow>>,
}

impl RosterGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Places an entry, replacing any existing one.
    pub fn insert(&mut self, date: Date, staff: StaffId, entry: RosterEntry) {
        Arc::make_mut(self.cells.entry(date).or_default()).insert(staff, entry);
    }

    /// Returns the entry at a cell.
    #[must_use]
    pub fn entry(&self, date: Date, staff: &StaffId) -> Option<&RosterEntry> {
        self.cells.get(&date).and_then(|row| row.get(staff))
    }

    /// Returns the duty code id at a cell, treating blanks as empty.
    #[must_use]
    pub fn duty_code(&self, date: Date, staff: &StaffId) -> Option<&str> {
        self.entry(date, staff)
            .and_then(|entry| entry.duty_code_id.as_deref())
            .filter(|code| !code.trim().is_empty())
    }

    /// Returns the violation message at a cell.
    #[must_use]
    pub fn violation(&self, date: Date, staff: &StaffId) -> Option<&str> {
        self.entry(date, staff)
            .and_then(|entry| entry.violation.as_deref())
    }

    /// Returns the dates present in the grid, ascending.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.cells.keys().copied()
    }

    /// Iterates over every cell in date then staff order.
    pub fn cells(&self) -> impl Iterator<Item = (Date, &StaffId, &RosterEntry)> {
        self.cells
            .iter()
            .flat_map(|(date, row)| row.iter().map(move |(staff, entry)| (*date, staff, entry)))
    }

    /// Counts cells carrying a violation.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.cells()
            .filter(|(_, _, entry)| entry.violation.is_some())
            .count()
    }

    /// Produces a new grid with violations replaced.
    ///
    /// Every violation matched by `in_scope` is cleared, then each message in
    /// `violations` is written to its cell, creating the cell when absent.
    /// The receiver is left untouched.
    #[must_use]
    pub fn with_violations<F>(&self, in_scope: F, violations: BTreeMap<CellKey, String>) -> Self
    where
        F: Fn(&StaffId) -> bool,
    {
        let mut next: Self = self.clone();

        for row in next.cells.values_mut() {
            let stale: bool = row
                .iter()
                .any(|(staff, entry)| entry.violation.is_some() && in_scope(staff));
            if !stale {
                continue;
            }
            for (staff, entry) in Arc::make_mut(row).iter_mut() {
                if in_scope(staff) {
                    entry.violation = None;
                }
            }
        }

        for ((date, staff), message) in violations {
            Arc::make_mut(next.cells.entry(date).or_default())
                .entry(staff)
                .or_default()
                .violation = Some(message);
        }

        next
    }
}

/// A duty code available to the department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyCode {
    /// Catalog id referenced by roster entries.
    pub id: String,
    /// Short display code.
    pub code: String,
    /// Whether the code marks the day as off duty.
    pub is_off_duty: bool,
}

/// Duty codes indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyCodeCatalog {
    codes: HashMap<String, DutyCode>,
}

impl DutyCodeCatalog {
    /// Builds a catalog. Later codes replace earlier ones with the same id.
    #[must_use]
    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = DutyCode>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|code| (code.id.clone(), code))
                .collect(),
        }
    }

    /// Returns the code for an id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DutyCode> {
        self.codes.get(id)
    }

    /// Returns whether a cell holding `duty_code_id` is an off-duty day.
    ///
    /// Empty cells are off duty. Ids missing from the catalog are on duty.
    #[must_use]
    pub fn is_off_duty(&self, duty_code_id: Option<&str>) -> bool {
        duty_code_id.is_none_or(|id| self.get(id).is_some_and(|code| code.is_off_duty))
    }
}
