// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while building domain values.
///
/// The compliance checks themselves never fail. These errors only arise at
/// construction time, when caller-supplied data breaks an invariant that the
/// checks rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Two duty records in one pilot time series share a date.
    DuplicateDutyDate {
        /// The repeated date.
        date: Date,
    },
    /// Aircraft category label is not recognised.
    UnknownAircraftCategory(String),
    /// Limits configuration is internally inconsistent.
    InvalidLimits {
        /// Description of the inconsistency.
        reason: String,
    },
    /// Date range end precedes its start or exceeds the safety cap.
    InvalidDateRange {
        /// Range start (inclusive).
        start: Date,
        /// Range end (inclusive).
        end: Date,
        /// Description of the problem.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DuplicateDutyDate { date } => {
                write!(f, "More than one duty record found for {date}")
            }
            Self::UnknownAircraftCategory(label) => {
                write!(f, "Unknown aircraft category: '{label}'")
            }
            Self::InvalidLimits { reason } => write!(f, "Invalid FTL limits: {reason}"),
            Self::InvalidDateRange { start, end, reason } => {
                write!(f, "Invalid date range {start} to {end}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
