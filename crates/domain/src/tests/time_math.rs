// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, decimal_to_time, duration_hours, instant_minutes, parse_date,
    parse_time_to_minutes, time_to_decimal, trailing_window,
};
use proptest::prelude::*;
use time::Date;
use time::macros::date;

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[test]
fn test_parse_time_to_minutes_accepts_clock_times() {
    assert_eq!(parse_time_to_minutes("00:00"), 0);
    assert_eq!(parse_time_to_minutes("08:30"), 510);
    assert_eq!(parse_time_to_minutes("23:59"), 1439);
    assert_eq!(parse_time_to_minutes(" 7:05 "), 425);
}

#[test]
fn test_parse_time_to_minutes_degrades_to_zero() {
    assert_eq!(parse_time_to_minutes(""), 0);
    assert_eq!(parse_time_to_minutes("0830"), 0);
    assert_eq!(parse_time_to_minutes("ab:cd"), 0);
    assert_eq!(parse_time_to_minutes("25:00"), 0);
    assert_eq!(parse_time_to_minutes("10:75"), 0);
}

#[test]
fn test_duration_hours_same_day() {
    assert!(approx(duration_hours("10:00", "14:00"), 4.0));
    assert!(approx(duration_hours("10:00", "10:45"), 0.75));
}

#[test]
fn test_duration_hours_rolls_over_midnight() {
    assert!(approx(duration_hours("23:00", "01:00"), 2.0));
    assert!(approx(duration_hours("20:00", "06:30"), 10.5));
}

#[test]
fn test_duration_hours_missing_input_is_zero() {
    assert!(approx(duration_hours("", "14:00"), 0.0));
    assert!(approx(duration_hours("10:00", ""), 0.0));
    assert!(approx(duration_hours("  ", "  "), 0.0));
}

#[test]
fn test_decimal_to_time_formats() {
    assert_eq!(decimal_to_time(1.5, false), "01:30");
    assert_eq!(decimal_to_time(0.0, false), "");
    assert_eq!(decimal_to_time(0.0, true), "00:00");
    assert_eq!(decimal_to_time(-1.5, false), "-01:30");
    assert_eq!(decimal_to_time(25.25, false), "25:15");
}

#[test]
fn test_decimal_to_time_blanks_values_that_round_to_zero() {
    assert_eq!(decimal_to_time(0.001, false), "");
    assert_eq!(decimal_to_time(-0.001, false), "");
    assert_eq!(decimal_to_time(-0.001, true), "00:00");
    assert_eq!(decimal_to_time(0.001, true), "00:00");
}

#[test]
fn test_time_to_decimal_accepts_both_forms() {
    assert!(approx(time_to_decimal("01:30"), 1.5));
    assert!(approx(time_to_decimal("2.25"), 2.25));
    assert!(approx(time_to_decimal("-00:45"), -0.75));
    assert!(approx(time_to_decimal(""), 0.0));
    assert!(approx(time_to_decimal("n/a"), 0.0));
}

#[test]
fn test_trailing_window_is_inclusive() {
    let target: Date = date!(2026 - 03 - 10);
    assert_eq!(trailing_window(target, 1), (target, target));
    assert_eq!(trailing_window(target, 3), (date!(2026 - 03 - 08), target));
    assert_eq!(trailing_window(target, 28), (date!(2026 - 02 - 11), target));
}

#[test]
fn test_instant_minutes_spans_dates() {
    let first: i64 = instant_minutes(date!(2026 - 03 - 10), 20 * 60);
    let second: i64 = instant_minutes(date!(2026 - 03 - 11), 6 * 60);
    assert_eq!(second - first, 10 * 60);
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2026-03-10").unwrap(), date!(2026 - 03 - 10));
    assert!(matches!(
        parse_date("10/03/2026"),
        Err(DomainError::DateParseError { .. })
    ));
    assert!(parse_date("2026-02-30").is_err());
}

proptest! {
    #[test]
    fn test_duration_is_within_one_day(
        start_h in 0u32..24, start_m in 0u32..60, end_h in 0u32..24, end_m in 0u32..60
    ) {
        let start: String = format!("{start_h:02}:{start_m:02}");
        let end: String = format!("{end_h:02}:{end_m:02}");
        let hours: f64 = duration_hours(&start, &end);
        prop_assert!((0.0..24.0).contains(&hours));
    }

    #[test]
    fn test_clock_durations_add_up_to_a_day(
        start_h in 0u32..24, start_m in 0u32..60, end_h in 0u32..24, end_m in 0u32..60
    ) {
        prop_assume!((start_h, start_m) != (end_h, end_m));
        let start: String = format!("{start_h:02}:{start_m:02}");
        let end: String = format!("{end_h:02}:{end_m:02}");
        let there: f64 = duration_hours(&start, &end);
        let back: f64 = duration_hours(&end, &start);
        prop_assert!((there + back - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_decimal_formatting_round_trips_whole_minutes(minutes in -6000i64..6000) {
        let decimal: f64 = crate::minutes_to_hours(minutes);
        let formatted: String = decimal_to_time(decimal, true);
        prop_assert!((time_to_decimal(&formatted) - decimal).abs() < 1e-9);
    }
}
