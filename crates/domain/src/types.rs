// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::time_math::{duration_hours, time_to_decimal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::Date;

/// Remarks value that marks a record as a day off regardless of times.
pub const DAY_OFF_REMARK: &str = "DAY OFF";

/// Aircraft category that selects the FDP table and days-off rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftCategory {
    /// Rotary-wing operations.
    Helicopter,
    /// Aeroplane operations.
    FixedWing,
}

impl AircraftCategory {
    /// Converts this category to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Helicopter => "Helicopter",
            Self::FixedWing => "Fixed-Wing",
        }
    }

    /// Parses a category label, returning `None` for anything unrecognised.
    ///
    /// Matching is case-insensitive and ignores spaces, hyphens and
    /// underscores, so `"fixed wing"`, `"Fixed-Wing"` and `"FIXED_WING"` all
    /// match.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "helicopter" | "rotary" | "rotarywing" => Some(Self::Helicopter),
            "fixedwing" | "aeroplane" | "airplane" => Some(Self::FixedWing),
            _ => None,
        }
    }
}

impl FromStr for AircraftCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| DomainError::UnknownAircraftCategory(s.to_string()))
    }
}

impl std::fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Staff and aircraft configuration for the pilot under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotProfile {
    /// The pilot's aircraft category. `None` when the configured label was
    /// not recognised; FDP lookups then yield a zero limit.
    pub category: Option<AircraftCategory>,
}

impl PilotProfile {
    /// Creates a profile for a known category.
    #[must_use]
    pub const fn new(category: AircraftCategory) -> Self {
        Self {
            category: Some(category),
        }
    }

    /// Creates a profile from a configuration label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self {
            category: AircraftCategory::from_label(label),
        }
    }
}

/// A single pilot's flight-log entry for one calendar date.
///
/// Every clock field is an optional `"HH:mm"` string. A blank string is
/// treated exactly like a missing one. A record with neither a duty start nor
/// a standby-on time represents a day off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DutyRecord {
    /// The calendar date the duty is logged against.
    pub date: Option<Date>,
    /// Duty period start.
    pub duty_start: Option<String>,
    /// Duty period end.
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
    /// Flight time per aircraft type, `"HH:mm"` or decimal hours.
    pub aircraft_hours: BTreeMap<String, String>,
    /// In-duty break start.
    pub break_start: Option<String>,
    /// In-duty break end.
    pub break_end: Option<String>,
    /// Number of sectors flown. Zero when not recorded.
    pub sectors: u8,
    /// Whether the duty was a two-pilot operation.
    pub is_two_pilot: bool,
    /// Whether the duty was a split duty.
    pub is_split_duty: bool,
    /// Free-text remarks.
    pub remarks: Option<String>,
}

/// Returns the field value if it holds a non-blank string.
#[must_use]
pub fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl DutyRecord {
    /// Creates an empty record for a date.
    #[must_use]
    pub fn on(date: Date) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Sets the duty start and end times.
    #[must_use]
    pub fn with_duty(mut self, start: &str, end: &str) -> Self {
        self.duty_start = Some(start.to_string());
        self.duty_end = Some(end.to_string());
        self
    }

    /// Sets the standby on and off times.
    #[must_use]
    pub fn with_standby(mut self, on: &str, off: &str) -> Self {
        self.standby_on = Some(on.to_string());
        self.standby_off = Some(off.to_string());
        self
    }

    /// Sets the flight duty period start and end times.
    #[must_use]
    pub fn with_fdp(mut self, start: &str, end: &str) -> Self {
        self.fdp_start = Some(start.to_string());
        self.fdp_end = Some(end.to_string());
        self
    }

    /// Sets the first take-off and last landing times.
    #[must_use]
    pub fn with_flight(mut self, on: &str, off: &str) -> Self {
        self.flight_on = Some(on.to_string());
        self.flight_off = Some(off.to_string());
        self
    }

    /// Sets the in-duty break times.
    #[must_use]
    pub fn with_break(mut self, start: &str, end: &str) -> Self {
        self.break_start = Some(start.to_string());
        self.break_end = Some(end.to_string());
        self
    }

    /// Records flight time against an aircraft type.
    #[must_use]
    pub fn with_aircraft_hours(mut self, aircraft_type: &str, hours: &str) -> Self {
        self.aircraft_hours
            .insert(aircraft_type.to_string(), hours.to_string());
        self
    }

    /// Sets the sector count.
    #[must_use]
    pub const fn with_sectors(mut self, sectors: u8) -> Self {
        self.sectors = sectors;
        self
    }

    /// Marks the duty as a two-pilot operation.
    #[must_use]
    pub const fn two_pilot(mut self) -> Self {
        self.is_two_pilot = true;
        self
    }

    /// Marks the duty as a split duty.
    #[must_use]
    pub const fn split_duty(mut self) -> Self {
        self.is_split_duty = true;
        self
    }

    /// Sets the remarks.
    #[must_use]
    pub fn with_remarks(mut self, remarks: &str) -> Self {
        self.remarks = Some(remarks.to_string());
        self
    }

    /// Returns whether the record starts a shift (duty or standby).
    #[must_use]
    pub fn starts_shift(&self) -> bool {
        present(self.duty_start.as_ref()).is_some() || present(self.standby_on.as_ref()).is_some()
    }

    /// Returns whether the record counts as a day off.
    #[must_use]
    pub fn is_day_off(&self) -> bool {
        !self.starts_shift() || self.remarks.as_deref() == Some(DAY_OFF_REMARK)
    }

    /// Returns whether the record has an end time for a duty or standby.
    #[must_use]
    pub fn has_end(&self) -> bool {
        present(self.duty_end.as_ref()).is_some() || present(self.standby_off.as_ref()).is_some()
    }

    /// The start of the shift: standby-on if present, else duty start.
    #[must_use]
    pub fn effective_start(&self) -> Option<&str> {
        present(self.standby_on.as_ref()).or_else(|| present(self.duty_start.as_ref()))
    }

    /// The end of the shift: duty end if present, else standby-off.
    #[must_use]
    pub fn effective_end(&self) -> Option<&str> {
        present(self.duty_end.as_ref()).or_else(|| present(self.standby_off.as_ref()))
    }

    /// Duty duration in hours, 0 if either bound is missing.
    #[must_use]
    pub fn duty_hours(&self) -> f64 {
        span_hours(self.duty_start.as_ref(), self.duty_end.as_ref())
    }

    /// Standby duration in hours, 0 if either bound is missing.
    #[must_use]
    pub fn standby_hours(&self) -> f64 {
        span_hours(self.standby_on.as_ref(), self.standby_off.as_ref())
    }

    /// Break duration in hours, 0 if either bound is missing.
    #[must_use]
    pub fn break_hours(&self) -> f64 {
        span_hours(self.break_start.as_ref(), self.break_end.as_ref())
    }

    /// Flight duty period duration in hours, 0 if either bound is missing.
    #[must_use]
    pub fn fdp_hours(&self) -> f64 {
        span_hours(self.fdp_start.as_ref(), self.fdp_end.as_ref())
    }

    /// Duty hours counted towards cumulative totals: duty plus half of standby.
    #[must_use]
    pub fn weighted_duty_hours(&self) -> f64 {
        self.duty_hours() + 0.5 * self.standby_hours()
    }

    /// Flight hours for the day.
    ///
    /// The per-aircraft-type breakdown wins when it is non-empty; otherwise
    /// the first take-off to last landing span is used.
    #[must_use]
    pub fn flight_hours(&self) -> f64 {
        if self.aircraft_hours.is_empty() {
            return span_hours(self.flight_on.as_ref(), self.flight_off.as_ref());
        }
        self.aircraft_hours
            .values()
            .map(|hours| time_to_decimal(hours))
            .sum()
    }
}

fn span_hours(start: Option<&String>, end: Option<&String>) -> f64 {
    match (present(start), present(end)) {
        (Some(start), Some(end)) => duration_hours(start, end),
        _ => 0.0,
    }
}

/// A single pilot's duty records, ordered by date.
///
/// Dates are unique. Missing dates are implicit days off and are never
/// materialised as records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PilotTimeSeries {
    entries: Vec<(Date, DutyRecord)>,
}

impl PilotTimeSeries {
    /// Builds a time series from records in any order.
    ///
    /// Records without a date are ignored since they cannot be placed on the
    /// timeline.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateDutyDate` if two records share a date.
    pub fn new<I>(records: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = DutyRecord>,
    {
        let mut entries: Vec<(Date, DutyRecord)> = records
            .into_iter()
            .filter_map(|record| record.date.map(|date| (date, record)))
            .collect();
        entries.sort_by_key(|(date, _)| *date);

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(DomainError::DuplicateDutyDate { date: pair[0].0 });
        }

        Ok(Self { entries })
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the series holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the record logged on `date`, if any.
    #[must_use]
    pub fn record_on(&self, date: Date) -> Option<&DutyRecord> {
        self.entries
            .binary_search_by_key(&date, |(d, _)| *d)
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Returns whether `date` is an off day (no record, or an off-day record).
    #[must_use]
    pub fn is_off_day(&self, date: Date) -> bool {
        self.record_on(date).is_none_or(DutyRecord::is_day_off)
    }

    /// Returns the records with dates in `[from, to]`, in date order.
    #[must_use]
    pub fn between(&self, from: Date, to: Date) -> &[(Date, DutyRecord)] {
        if from > to {
            return &[];
        }
        let start: usize = self.entries.partition_point(|(d, _)| *d < from);
        let end: usize = self.entries.partition_point(|(d, _)| *d <= to);
        &self.entries[start..end]
    }

    /// Returns the records dated on or before `date`, in date order.
    #[must_use]
    pub fn up_to(&self, date: Date) -> &[(Date, DutyRecord)] {
        let end: usize = self.entries.partition_point(|(d, _)| *d <= date);
        &self.entries[..end]
    }

    /// Returns the most recent record strictly before `date` that has a duty
    /// end or standby-off time.
    #[must_use]
    pub fn previous_with_end(&self, date: Date) -> Option<(Date, &DutyRecord)> {
        let end: usize = self.entries.partition_point(|(d, _)| *d < date);
        self.entries[..end]
            .iter()
            .rev()
            .find(|(_, record)| record.has_end())
            .map(|(d, record)| (*d, record))
    }

    /// Iterates over all `(date, record)` pairs in date order.
    pub fn records(&self) -> impl Iterator<Item = (Date, &DutyRecord)> {
        self.entries.iter().map(|(d, record)| (*d, record))
    }
}
