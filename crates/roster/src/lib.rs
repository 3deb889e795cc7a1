// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod engine;
mod error;
mod grid;
mod rules;

#[cfg(test)]
mod tests;

pub use engine::{MAX_ROSTER_DATES, revalidate_staff, validate_roster};
pub use error::RosterError;
pub use grid::{CellKey, DutyCode, DutyCodeCatalog, RosterEntry, RosterGrid, StaffId};
pub use rules::{MAX_RULE_DAYS, RosterRule, ValidationRule};
