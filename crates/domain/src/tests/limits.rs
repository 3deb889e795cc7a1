// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FtlLimits};

#[test]
fn test_default_limits_are_valid() {
    let limits: FtlLimits = FtlLimits::default();
    assert!(limits.validate().is_ok());
    assert_eq!(limits.max_consecutive_duty_days, 7);
    assert_eq!(limits.wocl_start_minute, 120);
    assert_eq!(limits.wocl_end_minute, 359);
}

#[test]
fn test_from_json_overrides_only_given_fields() {
    let limits: FtlLimits =
        FtlLimits::from_json(r#"{"max_standby_hours": 10.0, "min_days_off_in_28": 8}"#).unwrap();

    assert!((limits.max_standby_hours - 10.0).abs() < f64::EPSILON);
    assert_eq!(limits.min_days_off_in_28, 8);
    assert!((limits.min_rest_hours - 12.0).abs() < f64::EPSILON);
    assert_eq!(limits.duty_hour_limits, FtlLimits::default().duty_hour_limits);
}

#[test]
fn test_from_json_reads_cumulative_windows() {
    let limits: FtlLimits =
        FtlLimits::from_json(r#"{"flight_hour_limits": [[28, 90.0], [90, 250.0]]}"#).unwrap();
    assert_eq!(limits.flight_hour_limits, vec![(28, 90.0), (90, 250.0)]);
}

#[test]
fn test_from_json_rejects_malformed_document() {
    let result: Result<FtlLimits, DomainError> = FtlLimits::from_json("{not json");
    assert!(matches!(result, Err(DomainError::InvalidLimits { .. })));
}

#[test]
fn test_validate_rejects_reversed_wocl() {
    let limits: FtlLimits = FtlLimits {
        wocl_start_minute: 400,
        wocl_end_minute: 100,
        ..FtlLimits::default()
    };
    assert!(matches!(
        limits.validate(),
        Err(DomainError::InvalidLimits { .. })
    ));
}

#[test]
fn test_validate_rejects_zero_day_window() {
    let limits: FtlLimits = FtlLimits {
        duty_hour_limits: vec![(0, 10.0)],
        ..FtlLimits::default()
    };
    assert!(limits.validate().is_err());
}

#[test]
fn test_validate_rejects_negative_rest() {
    let limits: FtlLimits = FtlLimits {
        min_rest_hours: -1.0,
        ..FtlLimits::default()
    };
    assert!(limits.validate().is_err());
}

#[test]
fn test_in_wocl_bounds_are_inclusive() {
    let limits: FtlLimits = FtlLimits::default();
    assert!(!limits.in_wocl(119));
    assert!(limits.in_wocl(120));
    assert!(limits.in_wocl(359));
    assert!(!limits.in_wocl(360));
}
