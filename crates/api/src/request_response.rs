// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross this boundary as `YYYY-MM-DD` strings and aircraft
//! categories as configuration labels. Conversion into engine types happens
//! in the handlers.

use crew_ftl::DailyCompliance;
use crew_ftl_domain::FtlLimits;
use crew_ftl_roster::DutyCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One flight-log entry as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DutyRecordDto {
    /// The record date (`YYYY-MM-DD`).
    pub date: String,
    /// Duty period start (`HH:mm`).
    pub duty_start: Option<String>,
    /// Duty period end (`HH:mm`).
    pub duty_end: Option<String>,
    /// Standby start.
    pub standby_on: Option<String>,
    /// Standby end.
    pub standby_off: Option<String>,
    /// Flight duty period start.
    pub fdp_start: Option<String>,
    /// Flight duty period end.
    pub fdp_end: Option<String>,
    /// First take-off.
    pub flight_on: Option<String>,
    /// Last landing.
    pub flight_off: Option<String>,
    /// Flight time per aircraft type.
    pub aircraft_hours: BTreeMap<String, String>,
    /// In-duty break start.
    pub break_start: Option<String>,
    /// In-duty break end.
    pub break_end: Option<String>,
    /// Sectors flown.
    pub sectors: u8,
    /// Two-pilot operation.
    pub is_two_pilot: bool,
    /// Split duty.
    pub is_split_duty: bool,
    /// Free-text remarks.
    pub remarks: Option<String>,
}

/// API request to evaluate one pilot on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateDayRequest {
    /// Aircraft category label (e.g. `Helicopter`, `Fixed-Wing`).
    pub category: Option<String>,
    /// The pilot's flight log.
    pub records: Vec<DutyRecordDto>,
    /// The date to evaluate.
    pub date: String,
    /// Limits to apply; defaults when absent.
    #[serde(default)]
    pub limits: Option<FtlLimits>,
}

/// API request to evaluate one pilot over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatePeriodRequest {
    /// Aircraft category label.
    pub category: Option<String>,
    /// The pilot's flight log.
    pub records: Vec<DutyRecordDto>,
    /// First date to evaluate.
    pub start_date: String,
    /// Last date to evaluate.
    pub end_date: String,
    /// Limits to apply; defaults when absent.
    #[serde(default)]
    pub limits: Option<FtlLimits>,
}

/// API response for a single evaluated date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayComplianceResponse {
    /// The evaluated date (`YYYY-MM-DD`).
    pub date: String,
    /// Whether no check reported a violation.
    pub is_compliant: bool,
    /// Violation messages in check order.
    pub violations: Vec<String>,
    /// Every verdict for the date.
    pub details: DailyCompliance,
}

/// API response for a period evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComplianceResponse {
    /// One entry per date, ascending.
    pub days: Vec<DayComplianceResponse>,
    /// Number of dates with at least one violation.
    pub violating_days: usize,
}

/// A department rule as stored in department settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Rule type, e.g. `MAX_CONSECUTIVE_DUTY`.
    pub rule_type: String,
    /// Numeric parameters by name (`days`, `period`, `consecutiveDays`).
    #[serde(default)]
    pub params: BTreeMap<String, u32>,
    /// Custom message template.
    #[serde(default)]
    pub message_template: Option<String>,
}

/// One roster cell as exchanged with the roster display layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterEntryDto {
    /// The cell date (`YYYY-MM-DD`).
    pub date: String,
    /// The staff member.
    pub staff_id: String,
    /// Assigned duty code id.
    pub duty_code_id: Option<String>,
    /// Violation message.
    pub violation: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
    /// Display flags.
    pub flags: Vec<String>,
}

/// API request to validate a department roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRosterRequest {
    /// Every cell of the roster.
    pub entries: Vec<RosterEntryDto>,
    /// Staff members on the department roster.
    pub staff: Vec<String>,
    /// Dates to validate (`YYYY-MM-DD`).
    pub dates: Vec<String>,
    /// The department's duty codes.
    pub duty_codes: Vec<DutyCode>,
    /// Department rules in priority order.
    pub rules: Vec<RuleDefinition>,
    /// Revalidate only this staff member when set.
    #[serde(default)]
    pub staff_id: Option<String>,
}

/// API response for a roster validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRosterResponse {
    /// Every cell of the validated roster, in date then staff order.
    pub entries: Vec<RosterEntryDto>,
    /// Number of cells carrying a violation.
    pub violation_count: usize,
}
