// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department validation rules.
//!
//! The rule set is closed: a department picks rules from these types and
//! supplies their numeric parameters and, optionally, its own message
//! template.

use crate::error::RosterError;
use crew_ftl_domain::fill_template;
use serde::{Deserialize, Serialize};

/// Longest window or run length, in days, a rule may name.
pub const MAX_RULE_DAYS: u32 = 366;

/// A roster rule and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RosterRule {
    /// No more than `days` on-duty days in a row.
    MaxConsecutiveDuty {
        /// Longest allowed run of duty days.
        days: u32,
    },
    /// At least `days` off-duty days in every trailing `period`-day window.
    MinOffDaysInPeriod {
        /// Window length in days.
        period: u32,
        /// Required off-duty days.
        days: u32,
    },
    /// A run of at least `consecutive_days` off-duty days in every trailing
    /// `period`-day window.
    MinConsecutiveOffDaysInPeriod {
        /// Window length in days.
        period: u32,
        /// Required length of the longest off-duty run.
        #[serde(rename = "consecutiveDays")]
        consecutive_days: u32,
    },
}

impl RosterRule {
    /// Returns the rule type name used in department settings.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::MaxConsecutiveDuty { .. } => "MAX_CONSECUTIVE_DUTY",
            Self::MinOffDaysInPeriod { .. } => "MIN_OFF_DAYS_IN_PERIOD",
            Self::MinConsecutiveOffDaysInPeriod { .. } => "MIN_CONSECUTIVE_OFF_DAYS_IN_PERIOD",
        }
    }

    /// Returns the message used when the department supplies none.
    #[must_use]
    pub const fn default_template(&self) -> &'static str {
        match self {
            Self::MaxConsecutiveDuty { .. } => "Exceeds maximum of {days} consecutive duty days",
            Self::MinOffDaysInPeriod { .. } => "Requires at least {days} days off in {period} days",
            Self::MinConsecutiveOffDaysInPeriod { .. } => {
                "Requires at least {consecutiveDays} consecutive days off in {period} days"
            }
        }
    }

    /// Returns the template placeholders and their values.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, u32)> {
        match *self {
            Self::MaxConsecutiveDuty { days } => vec![("days", days)],
            Self::MinOffDaysInPeriod { period, days } => vec![("period", period), ("days", days)],
            Self::MinConsecutiveOffDaysInPeriod {
                period,
                consecutive_days,
            } => vec![("period", period), ("consecutiveDays", consecutive_days)],
        }
    }

    /// Checks that the rule can be evaluated.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidRule` if a day count is zero or above
    /// `MAX_RULE_DAYS`, or a requirement is larger than its window.
    pub fn validate(&self) -> Result<(), RosterError> {
        let reason: Option<String> = match *self {
            Self::MaxConsecutiveDuty { days } => {
                if days == 0 {
                    Some(String::from("days must be at least 1"))
                } else if days > MAX_RULE_DAYS {
                    Some(format!("days must be at most {MAX_RULE_DAYS}"))
                } else {
                    None
                }
            }
            Self::MinOffDaysInPeriod { period, days } => {
                period_problem(period).or_else(|| {
                    (days > period).then(|| format!("{days} days off cannot fit in {period} days"))
                })
            }
            Self::MinConsecutiveOffDaysInPeriod {
                period,
                consecutive_days,
            } => {
                period_problem(period).or_else(|| {
                    (consecutive_days > period).then(|| {
                        format!("{consecutive_days} consecutive days off cannot fit in {period} days")
                    })
                })
            }
        };

        reason.map_or(Ok(()), |reason| {
            Err(RosterError::InvalidRule {
                rule: self.type_name(),
                reason,
            })
        })
    }
}

fn period_problem(period: u32) -> Option<String> {
    if period == 0 {
        Some(String::from("period must be at least 1"))
    } else if period > MAX_RULE_DAYS {
        Some(format!("period must be at most {MAX_RULE_DAYS} days"))
    } else {
        None
    }
}

/// A rule as configured by a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// The rule and its parameters.
    pub rule: RosterRule,
    /// Custom message template; the rule's default is used when absent.
    #[serde(default)]
    pub message_template: Option<String>,
}

impl ValidationRule {
    /// Creates a rule with the default message.
    #[must_use]
    pub const fn new(rule: RosterRule) -> Self {
        Self {
            rule,
            message_template: None,
        }
    }

    /// Replaces the message template.
    #[must_use]
    pub fn with_template(mut self, template: &str) -> Self {
        self.message_template = Some(template.to_string());
        self
    }

    /// Renders the violation message for one flagged cell.
    ///
    /// # Arguments
    ///
    /// * `detail` - Suffix describing this particular cell, e.g. `(Day 8 of 7)`
    #[must_use]
    pub fn message(&self, detail: &str) -> String {
        let template: &str = self
            .message_template
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.rule.default_template());
        let base: String = fill_template(template, &self.rule.params());
        if detail.is_empty() {
            base
        } else {
            format!("{base} {detail}")
        }
    }
}
