// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Regulatory flight duty period tables.
//!
//! These are process-wide constants. Helicopter limits are keyed by the
//! start-time band of the duty; fixed-wing limits are keyed by the start hour
//! and the number of sectors flown.

/// Maximum flight time reported for fixed-wing duties, where flight time is
/// bounded by the FDP alone.
pub const FIXED_WING_MAX_FLIGHT_TIME: f64 = 99.0;

/// One row of a helicopter FDP table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelicopterFdpRow {
    /// First minute of the day covered by this row (inclusive).
    pub from_minute: u32,
    /// Minute of the day where this row stops applying (exclusive).
    pub to_minute: u32,
    /// Maximum flight duty period in hours.
    pub max_fdp: f64,
    /// Maximum flight time in hours.
    pub max_flight_time: f64,
}

impl HelicopterFdpRow {
    const fn new(from_hour: u32, to_hour: u32, max_fdp: f64, max_flight_time: f64) -> Self {
        Self {
            from_minute: from_hour * 60,
            to_minute: to_hour * 60,
            max_fdp,
            max_flight_time,
        }
    }

    /// Returns whether the row covers a start minute.
    #[must_use]
    pub const fn covers(&self, minute_of_day: u32) -> bool {
        minute_of_day >= self.from_minute && minute_of_day < self.to_minute
    }
}

/// Helicopter two-pilot limits. Rows are checked in order.
pub static HELICOPTER_TWO_PILOT: [HelicopterFdpRow; 6] = [
    HelicopterFdpRow::new(6, 8, 11.0, 7.0),
    HelicopterFdpRow::new(8, 14, 12.0, 8.0),
    HelicopterFdpRow::new(14, 18, 11.0, 7.0),
    HelicopterFdpRow::new(18, 22, 10.0, 6.0),
    HelicopterFdpRow::new(22, 24, 9.0, 5.0),
    HelicopterFdpRow::new(0, 6, 9.0, 5.0),
];

/// Helicopter single-pilot limits. Rows are checked in order.
pub static HELICOPTER_SINGLE_PILOT: [HelicopterFdpRow; 6] = [
    HelicopterFdpRow::new(6, 8, 10.0, 6.0),
    HelicopterFdpRow::new(8, 14, 11.0, 7.0),
    HelicopterFdpRow::new(14, 18, 10.0, 6.0),
    HelicopterFdpRow::new(18, 22, 9.0, 5.0),
    HelicopterFdpRow::new(22, 24, 8.0, 4.0),
    HelicopterFdpRow::new(0, 6, 8.0, 4.0),
];

/// Fixed-wing two-pilot limits indexed by sector column (1..=8+ sectors).
type TwoPilotRow = [f64; 8];

/// Fixed-wing single-pilot limits indexed by sector band
/// (<=4, 5, 6, 7, >=8 sectors).
type SinglePilotRow = [f64; 5];

/// Two-pilot row used for start hours with no explicit entry (17:00-04:59).
pub static FIXED_WING_TWO_PILOT_DEFAULT: TwoPilotRow =
    [11.0, 11.0, 10.5, 10.0, 9.5, 9.0, 9.0, 9.0];

/// Single-pilot row used for start hours with no explicit entry.
pub static FIXED_WING_SINGLE_PILOT_DEFAULT: SinglePilotRow = [10.0, 9.25, 8.5, 7.75, 7.0];

/// Two-pilot limits keyed by start hour.
pub static FIXED_WING_TWO_PILOT: [(u32, TwoPilotRow); 12] = [
    (5, [12.0, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0]),
    (6, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (7, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (8, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (9, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (10, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (11, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (12, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (13, [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0]),
    (14, [12.5, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5]),
    (15, [12.0, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0]),
    (16, [11.5, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0, 9.0]),
];

/// Single-pilot limits keyed by start hour.
pub static FIXED_WING_SINGLE_PILOT: [(u32, SinglePilotRow); 12] = [
    (5, [11.0, 10.25, 9.5, 8.75, 8.0]),
    (6, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (7, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (8, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (9, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (10, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (11, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (12, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (13, [12.0, 11.25, 10.5, 9.75, 9.0]),
    (14, [11.5, 10.75, 10.0, 9.25, 8.5]),
    (15, [11.0, 10.25, 9.5, 8.75, 8.0]),
    (16, [10.5, 9.75, 9.0, 8.25, 7.5]),
];

/// Looks up the helicopter limits `(max_fdp, max_flight_time)` for a start
/// minute. The first covering row wins.
#[must_use]
pub fn helicopter_limits(two_pilot: bool, start_minute: u32) -> Option<(f64, f64)> {
    let table: &[HelicopterFdpRow] = if two_pilot {
        &HELICOPTER_TWO_PILOT
    } else {
        &HELICOPTER_SINGLE_PILOT
    };

    table
        .iter()
        .find(|row| row.covers(start_minute))
        .map(|row| (row.max_fdp, row.max_flight_time))
}

/// Returns the two-pilot sector column: `min(max(sectors, 1), 8) - 1`.
#[must_use]
pub fn two_pilot_sector_index(sectors: u8) -> usize {
    usize::from(sectors.clamp(1, 8)) - 1
}

/// Returns the single-pilot sector band: <=4 sectors is 0, then one band
/// per sector up to 8 or more.
#[must_use]
pub const fn single_pilot_sector_index(sectors: u8) -> usize {
    match sectors {
        0..=4 => 0,
        5 => 1,
        6 => 2,
        7 => 3,
        _ => 4,
    }
}

/// Looks up the fixed-wing maximum FDP for a start hour and sector count.
///
/// Hours with no explicit row fall back to the default row.
#[must_use]
pub fn fixed_wing_max_fdp(two_pilot: bool, start_hour: u32, sectors: u8) -> f64 {
    if two_pilot {
        let row: &TwoPilotRow = FIXED_WING_TWO_PILOT
            .iter()
            .find(|(hour, _)| *hour == start_hour)
            .map_or(&FIXED_WING_TWO_PILOT_DEFAULT, |(_, row)| row);
        row[two_pilot_sector_index(sectors)]
    } else {
        let row: &SinglePilotRow = FIXED_WING_SINGLE_PILOT
            .iter()
            .find(|(hour, _)| *hour == start_hour)
            .map_or(&FIXED_WING_SINGLE_PILOT_DEFAULT, |(_, row)| row);
        row[single_pilot_sector_index(sectors)]
    }
}
