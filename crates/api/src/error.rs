// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::rule_config::RuleDefinitionError;
use crew_ftl::CoreError;
use crew_ftl_domain::DomainError;
use crew_ftl_roster::RosterError;

/// API-level errors.
///
/// These are distinct from domain, core and roster errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Configuration could not be loaded.
    InvalidConfiguration {
        /// A human-readable description of the problem.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidConfiguration { message } => {
                write!(f, "Invalid configuration: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RuleDefinitionError> for ApiError {
    fn from(err: RuleDefinitionError) -> Self {
        Self::InvalidInput {
            field: String::from("rules"),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfiguration {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DuplicateDutyDate { date } => ApiError::DomainRuleViolation {
            rule: String::from("unique_duty_date"),
            message: format!("More than one duty record found for {date}"),
        },
        DomainError::UnknownAircraftCategory(label) => ApiError::InvalidInput {
            field: String::from("category"),
            message: format!("Unknown aircraft category '{label}'"),
        },
        DomainError::InvalidLimits { reason } => ApiError::InvalidConfiguration {
            message: format!("Invalid FTL limits: {reason}"),
        },
        DomainError::InvalidDateRange { start, end, reason } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: format!("Invalid date range {start} to {end}: {reason}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a roster error into an API error.
#[must_use]
pub fn translate_roster_error(err: RosterError) -> ApiError {
    match err {
        RosterError::InvalidRule { rule, reason } => ApiError::InvalidInput {
            field: String::from("rules"),
            message: format!("Invalid {rule} rule: {reason}"),
        },
        RosterError::UnknownStaff(staff_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Staff member"),
            message: format!("Staff member '{staff_id}' is not on the staff roster"),
        },
        RosterError::PeriodTooLong { dates, max } => ApiError::InvalidInput {
            field: String::from("dates"),
            message: format!("Cannot validate {dates} dates (maximum {max})"),
        },
    }
}
