// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crew_ftl_domain::{DutyRecord, FtlLimits};
use serde::{Deserialize, Serialize};

/// Standby length for one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandbyVerdict {
    /// Standby duration in hours; 0 when there was no standby.
    pub standby_duration: f64,
    /// Violation message, if the standby was too long.
    pub violation: Option<String>,
}

/// Flags a standby period longer than the configured maximum.
#[must_use]
pub fn check_standby(record: Option<&DutyRecord>, limits: &FtlLimits) -> StandbyVerdict {
    let standby_duration: f64 = record.map_or(0.0, DutyRecord::standby_hours);
    if standby_duration <= 0.0 {
        return StandbyVerdict::default();
    }

    let violation: Option<String> = (standby_duration > limits.max_standby_hours).then(|| {
        format!(
            "Standby of {standby_duration:.1}h exceeds maximum {:.1}h",
            limits.max_standby_hours
        )
    });

    StandbyVerdict {
        standby_duration,
        violation,
    }
}
