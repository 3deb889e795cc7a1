// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{DutyRecordDto, RosterEntryDto, RuleDefinition, ValidateRosterRequest};
use crew_ftl_roster::DutyCode;
use std::collections::BTreeMap;

pub fn create_test_duty(date: &str, start: &str, end: &str) -> DutyRecordDto {
    DutyRecordDto {
        date: date.to_string(),
        duty_start: Some(start.to_string()),
        duty_end: Some(end.to_string()),
        ..DutyRecordDto::default()
    }
}

pub fn create_test_rule(rule_type: &str, params: &[(&str, u32)]) -> RuleDefinition {
    RuleDefinition {
        rule_type: rule_type.to_string(),
        params: params
            .iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect::<BTreeMap<String, u32>>(),
        message_template: None,
    }
}

/// Dates `2026-03-01` onward, one per pattern character.
pub fn create_test_dates(len: u8) -> Vec<String> {
    (1..=len).map(|d| format!("2026-03-{d:02}")).collect()
}

/// Builds a roster request from `(staff, pattern)` pairs; `-` leaves a
/// cell empty and any other character becomes the duty code id.
pub fn create_test_roster_request(
    patterns: &[(&str, &str)],
    rules: Vec<RuleDefinition>,
) -> ValidateRosterRequest {
    let mut entries: Vec<RosterEntryDto> = Vec::new();
    let mut len: u8 = 0;
    for (staff_id, pattern) in patterns {
        for (i, c) in pattern.chars().enumerate() {
            let day: u8 = u8::try_from(i).unwrap() + 1;
            len = len.max(day);
            if c == '-' {
                continue;
            }
            entries.push(RosterEntryDto {
                date: format!("2026-03-{day:02}"),
                staff_id: (*staff_id).to_string(),
                duty_code_id: Some(c.to_string()),
                ..RosterEntryDto::default()
            });
        }
    }

    ValidateRosterRequest {
        entries,
        staff: patterns.iter().map(|(id, _)| (*id).to_string()).collect(),
        dates: create_test_dates(len),
        duty_codes: vec![
            DutyCode {
                id: String::from("D"),
                code: String::from("DAY"),
                is_off_duty: false,
            },
            DutyCode {
                id: String::from("O"),
                code: String::from("OFF"),
                is_off_duty: true,
            },
        ],
        rules,
        staff_id: None,
    }
}
