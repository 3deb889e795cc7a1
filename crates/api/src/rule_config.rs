// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion of department rule definitions into typed roster rules.

use crate::request_response::RuleDefinition;
use crew_ftl_roster::{RosterRule, ValidationRule};
use thiserror::Error;

/// Rule definition errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleDefinitionError {
    /// The rule type is not one of the supported rules.
    #[error("Unknown rule type '{rule_type}'")]
    UnknownRuleType { rule_type: String },

    /// A parameter the rule type needs is absent.
    #[error("Rule '{rule_type}' is missing parameter '{parameter}'")]
    MissingParameter {
        rule_type: String,
        parameter: &'static str,
    },
}

/// Builds a typed rule from a stored definition.
///
/// Rule types are matched case-insensitively. Parameters the rule type does
/// not use are ignored.
///
/// # Errors
///
/// Returns a `RuleDefinitionError` if the rule type is unknown or a
/// required parameter is missing.
pub fn to_validation_rule(definition: &RuleDefinition) -> Result<ValidationRule, RuleDefinitionError> {
    let rule_type: String = definition.rule_type.trim().to_ascii_uppercase();
    let param = |name: &'static str| -> Result<u32, RuleDefinitionError> {
        definition
            .params
            .get(name)
            .copied()
            .ok_or_else(|| RuleDefinitionError::MissingParameter {
                rule_type: rule_type.clone(),
                parameter: name,
            })
    };

    let rule: RosterRule = match rule_type.as_str() {
        "MAX_CONSECUTIVE_DUTY" => RosterRule::MaxConsecutiveDuty {
            days: param("days")?,
        },
        "MIN_OFF_DAYS_IN_PERIOD" => RosterRule::MinOffDaysInPeriod {
            period: param("period")?,
            days: param("days")?,
        },
        "MIN_CONSECUTIVE_OFF_DAYS_IN_PERIOD" => RosterRule::MinConsecutiveOffDaysInPeriod {
            period: param("period")?,
            consecutive_days: param("consecutiveDays")?,
        },
        _ => {
            return Err(RuleDefinitionError::UnknownRuleType {
                rule_type: definition.rule_type.clone(),
            });
        }
    };

    Ok(ValidationRule {
        rule,
        message_template: definition.message_template.clone(),
    })
}
