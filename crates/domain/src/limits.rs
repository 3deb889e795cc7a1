// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Numeric thresholds applied by the compliance checks.
//!
//! Defaults hold the regulatory values. Operators may override individual
//! fields through configuration; absent fields keep their defaults.

use crate::error::DomainError;
use crate::time_math::MINUTES_PER_DAY;
use serde::{Deserialize, Serialize};

/// Thresholds for the per-pilot compliance checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FtlLimits {
    /// Minimum rest between duties, in hours.
    pub min_rest_hours: f64,
    /// Rest that breaks a run of consecutive disruptive duties, in hours.
    pub disruptive_reset_rest_hours: f64,
    /// Maximum consecutive disruptive duties.
    pub max_consecutive_disruptive: u32,
    /// Maximum disruptive duties in any 7 days.
    pub max_disruptive_in_7_days: u32,
    /// First minute of the window of circadian low (inclusive).
    pub wocl_start_minute: u32,
    /// Last minute of the window of circadian low (inclusive).
    pub wocl_end_minute: u32,
    /// Maximum standby duration, in hours.
    pub max_standby_hours: f64,
    /// Maximum consecutive duty days.
    pub max_consecutive_duty_days: u32,
    /// Minimum days off in any 28 days.
    pub min_days_off_in_28: u32,
    /// Minimum helicopter days off in any 14 days.
    pub helicopter_min_days_off_in_14: u32,
    /// Cumulative duty limits as `(window days, max hours)`.
    pub duty_hour_limits: Vec<(u32, f64)>,
    /// Cumulative flight limits as `(window days, max hours)`.
    pub flight_hour_limits: Vec<(u32, f64)>,
    /// Maximum flight duty time in 14 days, in hours.
    pub max_fdp_hours_in_14: f64,
}

impl Default for FtlLimits {
    fn default() -> Self {
        Self {
            min_rest_hours: 12.0,
            disruptive_reset_rest_hours: 34.0,
            max_consecutive_disruptive: 3,
            max_disruptive_in_7_days: 4,
            wocl_start_minute: 2 * 60,
            wocl_end_minute: 5 * 60 + 59,
            max_standby_hours: 12.0,
            max_consecutive_duty_days: 7,
            min_days_off_in_28: 7,
            helicopter_min_days_off_in_14: 3,
            duty_hour_limits: vec![(7, 60.0), (14, 110.0), (28, 190.0)],
            flight_hour_limits: vec![(28, 100.0), (365, 900.0)],
            max_fdp_hours_in_14: 110.0,
        }
    }
}

impl FtlLimits {
    /// Parses limits from JSON. Fields missing from the document keep their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLimits` if the document cannot be parsed
    /// or the resulting limits are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let limits: Self = serde_json::from_str(json).map_err(|e| DomainError::InvalidLimits {
            reason: e.to_string(),
        })?;
        limits.validate()?;
        Ok(limits)
    }

    /// Checks that the limits are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLimits` if:
    /// - The WOCL band is reversed or extends past midnight
    /// - Any hour threshold is negative or not finite
    /// - Any cumulative window is zero days long
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.wocl_start_minute > self.wocl_end_minute || self.wocl_end_minute >= MINUTES_PER_DAY
        {
            return Err(DomainError::InvalidLimits {
                reason: format!(
                    "WOCL band {}..={} must be ordered and within one day",
                    self.wocl_start_minute, self.wocl_end_minute
                ),
            });
        }

        let hour_fields: [(&str, f64); 4] = [
            ("min_rest_hours", self.min_rest_hours),
            ("disruptive_reset_rest_hours", self.disruptive_reset_rest_hours),
            ("max_standby_hours", self.max_standby_hours),
            ("max_fdp_hours_in_14", self.max_fdp_hours_in_14),
        ];
        for (name, value) in hour_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidLimits {
                    reason: format!("{name} must be a non-negative number of hours"),
                });
            }
        }

        let windows = self.duty_hour_limits.iter().chain(&self.flight_hour_limits);
        for (days, hours) in windows {
            if *days == 0 {
                return Err(DomainError::InvalidLimits {
                    reason: String::from("Cumulative limit windows must be at least one day"),
                });
            }
            if !hours.is_finite() || *hours < 0.0 {
                return Err(DomainError::InvalidLimits {
                    reason: format!("{days}-day limit must be a non-negative number of hours"),
                });
            }
        }

        Ok(())
    }

    /// Returns whether a minute of the day falls inside the WOCL band.
    #[must_use]
    pub const fn in_wocl(&self, minute_of_day: u32) -> bool {
        minute_of_day >= self.wocl_start_minute && minute_of_day <= self.wocl_end_minute
    }
}
