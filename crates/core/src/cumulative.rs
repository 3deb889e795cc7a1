// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cumulative duty, flight and FDP limits over trailing windows.

use crate::rolling::{WindowSum, sum_window};
use crew_ftl_domain::{FtlLimits, PilotTimeSeries};
use serde::{Deserialize, Serialize};
use time::Date;

/// What a cumulative limit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CumulativeKind {
    /// Duty hours (standby at half weight).
    Duty,
    /// Flight hours.
    Flight,
    /// Flight duty period hours.
    FlightDutyPeriod,
}

impl CumulativeKind {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Duty => "Duty",
            Self::Flight => "Flight",
            Self::FlightDutyPeriod => "FDP",
        }
    }
}

/// One exceeded cumulative limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeFinding {
    /// What was measured.
    pub kind: CumulativeKind,
    /// Window length in days.
    pub window_days: u32,
    /// Hours accumulated in the window.
    pub hours: f64,
    /// The configured limit.
    pub limit: f64,
}

impl CumulativeFinding {
    /// Returns the violation message for this finding.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "{} hours of {:.1}h in {} days exceed limit of {:.1}h",
            self.kind.as_str(),
            self.hours,
            self.window_days,
            self.limit
        )
    }
}

/// Compares trailing totals ending on `target` against every configured
/// cumulative limit.
///
/// Findings are returned duty limits first, then flight limits, then the
/// 14-day FDP limit, each in configuration order.
#[must_use]
pub fn check_cumulative_limits(
    series: &PilotTimeSeries,
    target: Date,
    limits: &FtlLimits,
) -> Vec<CumulativeFinding> {
    let duty = limits
        .duty_hour_limits
        .iter()
        .map(|(days, limit)| (CumulativeKind::Duty, *days, *limit));
    let flight = limits
        .flight_hour_limits
        .iter()
        .map(|(days, limit)| (CumulativeKind::Flight, *days, *limit));
    let fdp = std::iter::once((
        CumulativeKind::FlightDutyPeriod,
        14,
        limits.max_fdp_hours_in_14,
    ));

    duty.chain(flight)
        .chain(fdp)
        .filter_map(|(kind, window_days, limit)| {
            let sum: WindowSum = sum_window(series, target, window_days);
            let hours: f64 = match kind {
                CumulativeKind::Duty => sum.duty_hours,
                CumulativeKind::Flight => sum.flight_hours,
                CumulativeKind::FlightDutyPeriod => sum.fdp_hours,
            };
            (hours > limit).then_some(CumulativeFinding {
                kind,
                window_days,
                hours,
                limit,
            })
        })
        .collect()
}
