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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;
mod rule_config;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error, translate_roster_error};
pub use handlers::{
    evaluate_pilot_day, evaluate_pilot_period, load_limits, load_rule_definitions,
    validate_department_roster,
};
pub use request_response::{
    DayComplianceResponse, DutyRecordDto, EvaluateDayRequest, EvaluatePeriodRequest,
    PeriodComplianceResponse, RosterEntryDto, RuleDefinition, ValidateRosterRequest,
    ValidateRosterResponse,
};
pub use rule_config::{RuleDefinitionError, to_validation_rule};
