// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler converts its request into engine types, runs the engine and
//! converts the result back. Engine errors are translated into `ApiError`.

use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_roster_error};
use crate::request_response::{
    DayComplianceResponse, DutyRecordDto, EvaluateDayRequest, EvaluatePeriodRequest,
    PeriodComplianceResponse, RosterEntryDto, RuleDefinition, ValidateRosterRequest,
    ValidateRosterResponse,
};
use crate::rule_config::to_validation_rule;
use crew_ftl::{DailyCompliance, evaluate_day, evaluate_period};
use crew_ftl_domain::{DutyRecord, FtlLimits, PilotProfile, PilotTimeSeries, parse_date};
use crew_ftl_roster::{
    DutyCodeCatalog, RosterEntry, RosterGrid, StaffId, ValidationRule, revalidate_staff,
    validate_roster,
};
use time::Date;
use tracing::{info, warn};

/// Loads FTL limits from a JSON document.
///
/// Fields missing from the document keep their regulatory defaults.
///
/// # Errors
///
/// Returns an error if the document is malformed or the limits are
/// inconsistent.
pub fn load_limits(json: &str) -> Result<FtlLimits, ApiError> {
    FtlLimits::from_json(json).map_err(translate_domain_error)
}

/// Loads a department's rule definitions from a JSON array.
///
/// # Errors
///
/// Returns an error if the document is malformed or any definition cannot
/// be turned into a rule.
pub fn load_rule_definitions(json: &str) -> Result<Vec<RuleDefinition>, ApiError> {
    let definitions: Vec<RuleDefinition> = serde_json::from_str(json)?;
    for definition in &definitions {
        to_validation_rule(definition)?;
    }
    Ok(definitions)
}

/// Evaluates one pilot on one date.
///
/// # Errors
///
/// Returns an error if a date cannot be parsed, two records share a date,
/// or the supplied limits are inconsistent.
pub fn evaluate_pilot_day(request: &EvaluateDayRequest) -> Result<DayComplianceResponse, ApiError> {
    let limits: FtlLimits = resolve_limits(request.limits.as_ref())?;
    let profile: PilotProfile = resolve_profile(request.category.as_deref());
    let series: PilotTimeSeries = build_series(&request.records)?;
    let date: Date = parse_field_date("date", &request.date)?;

    let compliance: DailyCompliance = evaluate_day(&series, date, &profile, &limits);
    Ok(to_day_response(compliance))
}

/// Evaluates one pilot over an inclusive date range.
///
/// # Errors
///
/// Returns an error if a date cannot be parsed, two records share a date,
/// the limits are inconsistent, or the range is reversed or too long.
pub fn evaluate_pilot_period(
    request: &EvaluatePeriodRequest,
) -> Result<PeriodComplianceResponse, ApiError> {
    let limits: FtlLimits = resolve_limits(request.limits.as_ref())?;
    let profile: PilotProfile = resolve_profile(request.category.as_deref());
    let series: PilotTimeSeries = build_series(&request.records)?;
    let start: Date = parse_field_date("start_date", &request.start_date)?;
    let end: Date = parse_field_date("end_date", &request.end_date)?;

    let days: Vec<DayComplianceResponse> = evaluate_period(&series, start, end, &profile, &limits)
        .map_err(translate_core_error)?
        .into_iter()
        .map(to_day_response)
        .collect();
    let violating_days: usize = days.iter().filter(|day| !day.is_compliant).count();

    Ok(PeriodComplianceResponse {
        days,
        violating_days,
    })
}

/// Validates a department roster, or one staff member of it.
///
/// The returned entries are a new roster; the request is left untouched.
///
/// # Errors
///
/// Returns an error if a date cannot be parsed, a rule definition is
/// invalid, or a targeted staff member is not on the staff roster.
pub fn validate_department_roster(
    request: &ValidateRosterRequest,
) -> Result<ValidateRosterResponse, ApiError> {
    let rules: Vec<ValidationRule> = request
        .rules
        .iter()
        .map(to_validation_rule)
        .collect::<Result<_, _>>()?;
    let grid: RosterGrid = build_grid(&request.entries)?;
    let staff: Vec<StaffId> = request.staff.iter().map(|id| StaffId::new(id)).collect();
    let dates: Vec<Date> = request
        .dates
        .iter()
        .map(|date| parse_field_date("dates", date))
        .collect::<Result<_, _>>()?;
    let catalog: DutyCodeCatalog = DutyCodeCatalog::new(request.duty_codes.iter().cloned());

    let validated: RosterGrid = match request.staff_id.as_deref() {
        Some(staff_id) => revalidate_staff(
            &grid,
            &staff,
            &StaffId::new(staff_id),
            &dates,
            &catalog,
            &rules,
        ),
        None => validate_roster(&grid, &staff, &dates, &catalog, &rules),
    }
    .map_err(translate_roster_error)?;

    let violation_count: usize = validated.violation_count();
    info!(
        targeted = request.staff_id.is_some(),
        violation_count, "Roster validation request completed"
    );

    Ok(ValidateRosterResponse {
        entries: to_entry_dtos(&validated),
        violation_count,
    })
}

fn resolve_limits(limits: Option<&FtlLimits>) -> Result<FtlLimits, ApiError> {
    let limits: FtlLimits = limits.cloned().unwrap_or_default();
    limits.validate().map_err(translate_domain_error)?;
    Ok(limits)
}

/// An unrecognised label yields a profile without a category, which the FDP
/// lookup treats as a zero limit.
fn resolve_profile(category: Option<&str>) -> PilotProfile {
    let profile: PilotProfile = PilotProfile::from_label(category.unwrap_or_default());
    if profile.category.is_none() {
        warn!(category, "Aircraft category not recognised; FDP limits will be zero");
    }
    profile
}

fn parse_field_date(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}

fn build_series(records: &[DutyRecordDto]) -> Result<PilotTimeSeries, ApiError> {
    let records: Vec<DutyRecord> = records
        .iter()
        .map(to_duty_record)
        .collect::<Result<_, _>>()?;
    PilotTimeSeries::new(records).map_err(translate_domain_error)
}

fn to_duty_record(dto: &DutyRecordDto) -> Result<DutyRecord, ApiError> {
    Ok(DutyRecord {
        date: Some(parse_field_date("records.date", &dto.date)?),
        duty_start: dto.duty_start.clone(),
        duty_end: dto.duty_end.clone(),
        standby_on: dto.standby_on.clone(),
        standby_off: dto.standby_off.clone(),
        fdp_start: dto.fdp_start.clone(),
        fdp_end: dto.fdp_end.clone(),
        flight_on: dto.flight_on.clone(),
        flight_off: dto.flight_off.clone(),
        aircraft_hours: dto.aircraft_hours.clone(),
        break_start: dto.break_start.clone(),
        break_end: dto.break_end.clone(),
        sectors: dto.sectors,
        is_two_pilot: dto.is_two_pilot,
        is_split_duty: dto.is_split_duty,
        remarks: dto.remarks.clone(),
    })
}

fn to_day_response(compliance: DailyCompliance) -> DayComplianceResponse {
    DayComplianceResponse {
        date: compliance.date.to_string(),
        is_compliant: compliance.is_compliant(),
        violations: compliance.violations.clone(),
        details: compliance,
    }
}

fn build_grid(entries: &[RosterEntryDto]) -> Result<RosterGrid, ApiError> {
    let mut grid: RosterGrid = RosterGrid::new();
    for dto in entries {
        let date: Date = parse_field_date("entries.date", &dto.date)?;
        grid.insert(
            date,
            StaffId::new(&dto.staff_id),
            RosterEntry {
                duty_code_id: dto.duty_code_id.clone(),
                violation: dto.violation.clone(),
                note: dto.note.clone(),
                flags: dto.flags.clone(),
            },
        );
    }
    Ok(grid)
}

fn to_entry_dtos(grid: &RosterGrid) -> Vec<RosterEntryDto> {
    grid.cells()
        .map(|(date, staff_id, entry)| RosterEntryDto {
            date: date.to_string(),
            staff_id: staff_id.to_string(),
            duty_code_id: entry.duty_code_id.clone(),
            violation: entry.violation.clone(),
            note: entry.note.clone(),
            flags: entry.flags.clone(),
        })
        .collect()
}
