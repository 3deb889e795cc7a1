// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::grid::StaffId;

/// Errors that can occur while validating a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A rule carries parameters it can never be evaluated with.
    InvalidRule {
        /// The rule type name.
        rule: &'static str,
        /// Why the parameters were rejected.
        reason: String,
    },
    /// Targeted revalidation named a staff member missing from the staff roster.
    UnknownStaff(StaffId),
    /// The date list is longer than the validation cap.
    PeriodTooLong {
        /// Number of distinct dates supplied.
        dates: usize,
        /// The cap.
        max: usize,
    },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRule { rule, reason } => {
                write!(f, "Invalid {rule} rule: {reason}")
            }
            Self::UnknownStaff(staff) => {
                write!(f, "Staff member '{staff}' is not on the staff roster")
            }
            Self::PeriodTooLong { dates, max } => {
                write!(f, "Cannot validate {dates} dates (maximum {max})")
            }
        }
    }
}

impl std::error::Error for RosterError {}
