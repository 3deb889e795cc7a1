// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clock-time and calendar arithmetic shared by every compliance check.
//!
//! Times arrive as `"HH:mm"` strings typed into flight logs. Parsing is
//! deliberately forgiving: malformed or missing input yields zero instead of
//! an error, because incomplete logs are the normal state while a roster is
//! being edited.
//!
//! ## Invariants
//!
//! - A zero result is ambiguous: it means either `"00:00"` or "no time entered".
//!   Callers that need to tell the two apart check the source field for
//!   presence before parsing.
//! - Durations handle a single midnight rollover only.

use crate::error::DomainError;
use time::macros::format_description;
use time::{Date, Duration};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parses an `"HH:mm"` string into minutes after midnight.
///
/// Returns 0 for empty, malformed, or out-of-range input.
///
/// # Arguments
///
/// * `value` - The clock time to parse
#[must_use]
pub fn parse_time_to_minutes(value: &str) -> u32 {
    let Some((hours, minutes)) = value.trim().split_once(':') else {
        return 0;
    };

    let (Ok(hours), Ok(minutes)) = (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>())
    else {
        return 0;
    };

    if hours >= 24 || minutes >= 60 {
        return 0;
    }

    hours * 60 + minutes
}

/// Returns the minutes between two clock times.
///
/// If `end` is earlier than `start` the span is assumed to cross midnight
/// once and 24 hours are added. Returns 0 if either value is blank.
#[must_use]
pub fn duration_minutes(start: &str, end: &str) -> u32 {
    if start.trim().is_empty() || end.trim().is_empty() {
        return 0;
    }

    let start_minutes: u32 = parse_time_to_minutes(start);
    let end_minutes: u32 = parse_time_to_minutes(end);

    if end_minutes < start_minutes {
        end_minutes + MINUTES_PER_DAY - start_minutes
    } else {
        end_minutes - start_minutes
    }
}

/// Returns the decimal hours between two clock times.
///
/// See [`duration_minutes`] for the rollover rule.
///
/// # Arguments
///
/// * `start` - The start clock time (`"HH:mm"`)
/// * `end` - The end clock time (`"HH:mm"`)
#[must_use]
pub fn duration_hours(start: &str, end: &str) -> f64 {
    f64::from(duration_minutes(start, end)) / 60.0
}

/// Formats decimal hours as `"HH:mm"`, with a leading `-` for negatives.
///
/// Values that round to zero minutes format as an empty string unless
/// `allow_zero` is set, in which case they format as `"00:00"`.
/// Hours are not wrapped at 24, so `25.5` formats as `"25:30"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn decimal_to_time(decimal: f64, allow_zero: bool) -> String {
    if !decimal.is_finite() {
        return String::new();
    }
    let total_minutes: u64 = (decimal.abs() * 60.0).round() as u64;
    if total_minutes == 0 {
        return if allow_zero {
            String::from("00:00")
        } else {
            String::new()
        };
    }

    let sign: &str = if decimal < 0.0 { "-" } else { "" };
    let hours: u64 = total_minutes / 60;
    let minutes: u64 = total_minutes % 60;

    format!("{sign}{hours:02}:{minutes:02}")
}

/// Converts `"HH:mm"` or a bare decimal string to decimal hours.
///
/// A leading `-` is honoured for `"HH:mm"` input. Anything unparseable is 0.
#[must_use]
pub fn time_to_decimal(value: &str) -> f64 {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if trimmed.contains(':') {
        let (negative, body): (bool, &str) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));

        let Some((hours, minutes)) = body.split_once(':') else {
            return 0.0;
        };
        let (Ok(hours), Ok(minutes)) = (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>())
        else {
            return 0.0;
        };
        if minutes >= 60 {
            return 0.0;
        }

        let magnitude: f64 = f64::from(hours) + f64::from(minutes) / 60.0;
        return if negative { -magnitude } else { magnitude };
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Converts a signed minute count to decimal hours.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// Returns an absolute minute index for a clock time on a calendar date.
///
/// The index counts minutes from the Julian day epoch so that instants on
/// different dates can be subtracted directly.
#[must_use]
pub fn instant_minutes(date: Date, minute_of_day: u32) -> i64 {
    i64::from(date.to_julian_day()) * i64::from(MINUTES_PER_DAY) + i64::from(minute_of_day)
}

/// Returns `date` moved back by `days`, saturating at the earliest
/// representable date.
#[must_use]
pub fn days_before(date: Date, days: i64) -> Date {
    date.checked_sub(Duration::days(days)).unwrap_or(Date::MIN)
}

/// Returns `date` moved forward by `days`, saturating at the latest
/// representable date.
#[must_use]
pub fn days_after(date: Date, days: i64) -> Date {
    date.checked_add(Duration::days(days)).unwrap_or(Date::MAX)
}

/// Returns the inclusive date window of `days` days ending on `target`.
///
/// A window of N days covers `[target - (N - 1), target]`. A zero-day window
/// is treated as a single day.
#[must_use]
pub fn trailing_window(target: Date, days: u32) -> (Date, Date) {
    let span: i64 = i64::from(days.max(1)) - 1;
    (days_before(target, span), target)
}

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}
