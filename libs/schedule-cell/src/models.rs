use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_SCHEDULE_LABEL: &str = "Horario no disponible";
pub const TEMPORARILY_UNAVAILABLE_LABEL: &str = "Temporalmente no disponible";
pub const CLOSED_TODAY_LABEL: &str = "Hoy: Cerrado";

// ==============================================================================
// SCHEDULE ENTRIES
// ==============================================================================

/// A time-of-day as the profile store hands it over: either a full
/// timestamp or a bare `HH:MM` / `HH:MM:SS` string.
///
/// JSON strings always land in `Text` so the caller's text survives a
/// round trip; anything that is not a string lands in `Other` and renders
/// as an empty time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Text(String),
    Timestamp(DateTime<FixedOffset>),
    Other(serde_json::Value),
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        TimeValue::Text(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        TimeValue::Text(value)
    }
}

impl From<DateTime<FixedOffset>> for TimeValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        TimeValue::Timestamp(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day_of_week: i32, // 0 = Sunday, 6 = Saturday
    #[serde(default)]
    pub start_time: Option<TimeValue>,
    #[serde(default)]
    pub end_time: Option<TimeValue>,
    pub is_active: bool,
}

impl ScheduleEntry {
    pub fn open(day_of_week: i32, start_time: impl Into<TimeValue>, end_time: impl Into<TimeValue>) -> Self {
        Self {
            day_of_week,
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            is_active: true,
        }
    }

    pub fn closed(day_of_week: i32) -> Self {
        Self {
            day_of_week,
            start_time: None,
            end_time: None,
            is_active: false,
        }
    }
}

/// An entry that survived normalization: validated day, times already
/// rendered as `HH:MM` (empty when unparsable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEntry {
    pub day: u8,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedSchedule {
    /// Absent or empty collection.
    NotConfigured,
    /// Entries exist but every one is inactive.
    AllClosed,
    /// Active entries sorted by day.
    Active(Vec<ActiveEntry>),
}

// ==============================================================================
// WEEKLY AVAILABILITY (CANONICAL FORM)
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub enabled: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl DayAvailability {
    pub fn open(start_time: &str, end_time: &str) -> Self {
        Self {
            enabled: true,
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub monday: DayAvailability,
    pub tuesday: DayAvailability,
    pub wednesday: DayAvailability,
    pub thursday: DayAvailability,
    pub friday: DayAvailability,
    pub saturday: DayAvailability,
    pub sunday: DayAvailability,
}

impl WeeklyAvailability {
    /// Slot for a Sunday-first day index.
    pub fn day(&self, day: u8) -> Option<&DayAvailability> {
        match day {
            0 => Some(&self.sunday),
            1 => Some(&self.monday),
            2 => Some(&self.tuesday),
            3 => Some(&self.wednesday),
            4 => Some(&self.thursday),
            5 => Some(&self.friday),
            6 => Some(&self.saturday),
            _ => None,
        }
    }

    pub fn day_mut(&mut self, day: u8) -> Option<&mut DayAvailability> {
        match day {
            0 => Some(&mut self.sunday),
            1 => Some(&mut self.monday),
            2 => Some(&mut self.tuesday),
            3 => Some(&mut self.wednesday),
            4 => Some(&mut self.thursday),
            5 => Some(&mut self.friday),
            6 => Some(&mut self.saturday),
            _ => None,
        }
    }
}

// ==============================================================================
// SUMMARY OPTIONS
// ==============================================================================

/// How the homogeneous label picks its first and last day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeStrategy {
    /// First and last day of the numerically sorted set.
    SortedBounds,
    /// Circular run detection, so Sat/Sun/Mon renders as `Sáb-Lun`.
    #[default]
    ContiguousRun,
}

impl FromStr for RangeStrategy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted-bounds" | "sorted_bounds" => Ok(RangeStrategy::SortedBounds),
            "contiguous-run" | "contiguous_run" => Ok(RangeStrategy::ContiguousRun),
            other => Err(ScheduleError::UnknownRangeStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub utc_offset: FixedOffset,
    pub range_strategy: RangeStrategy,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            utc_offset: shared_config::default_utc_offset(),
            range_strategy: RangeStrategy::default(),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidDayIndex(i32),

    #[error("More than one schedule entry for day {0}")]
    DuplicateDay(u8),

    #[error("Unknown range strategy: {0}")]
    UnknownRangeStrategy(String),
}
