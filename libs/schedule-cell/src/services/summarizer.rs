use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use shared_config::{default_utc_offset, AppConfig};

use crate::models::{
    NormalizedSchedule, RangeStrategy, ScheduleEntry, ScheduleError,
    SummaryOptions, WeeklyAvailability, NO_SCHEDULE_LABEL, TEMPORARILY_UNAVAILABLE_LABEL,
};
use crate::services::{
    classifier::shared_hours,
    conversion::weekly_to_entries,
    normalizer::normalize_entries,
    range_label::build_range_label,
    today::resolve_today_label,
};

/// Render a provider's week as a single display string.
///
/// Outcomes, checked in order: no entries, every entry closed, one shared
/// set of hours (day-range label), mixed hours (today's hours only).
pub fn summarize_schedule(
    entries: Option<&[ScheduleEntry]>,
    options: &SummaryOptions,
    now: DateTime<Utc>,
) -> Result<String, ScheduleError> {
    let active = match normalize_entries(entries)? {
        NormalizedSchedule::NotConfigured => return Ok(NO_SCHEDULE_LABEL.to_string()),
        NormalizedSchedule::AllClosed => return Ok(TEMPORARILY_UNAVAILABLE_LABEL.to_string()),
        NormalizedSchedule::Active(active) => active,
    };

    let summary = match shared_hours(&active) {
        Some((start, end)) => {
            debug!("Schedule is homogeneous across {} days", active.len());
            build_range_label(&active, start, end, options.range_strategy)
        }
        None => {
            debug!("Schedule hours differ between days, falling back to today");
            resolve_today_label(&active, now, options.utc_offset)
        }
    };

    Ok(summary)
}

impl SummaryOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        let utc_offset = config.utc_offset().unwrap_or_else(|| {
            warn!(
                "Invalid schedule UTC offset of {} hours, using default",
                config.schedule_utc_offset_hours
            );
            default_utc_offset()
        });

        let range_strategy = config
            .schedule_range_strategy
            .parse::<RangeStrategy>()
            .unwrap_or_else(|e| {
                warn!("{}, using default", e);
                RangeStrategy::default()
            });

        Self {
            utc_offset,
            range_strategy,
        }
    }
}

pub struct ScheduleSummarizer {
    options: SummaryOptions,
}

impl ScheduleSummarizer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            options: SummaryOptions::from_config(config),
        }
    }

    pub fn with_options(options: SummaryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// Summary as of right now. Not safe to cache across a day boundary.
    pub fn summarize(&self, entries: Option<&[ScheduleEntry]>) -> Result<String, ScheduleError> {
        self.summarize_at(entries, Utc::now())
    }

    pub fn summarize_at(
        &self,
        entries: Option<&[ScheduleEntry]>,
        now: DateTime<Utc>,
    ) -> Result<String, ScheduleError> {
        summarize_schedule(entries, &self.options, now)
    }

    pub fn summarize_weekly(&self, weekly: &WeeklyAvailability) -> Result<String, ScheduleError> {
        self.summarize_weekly_at(weekly, Utc::now())
    }

    pub fn summarize_weekly_at(
        &self,
        weekly: &WeeklyAvailability,
        now: DateTime<Utc>,
    ) -> Result<String, ScheduleError> {
        let entries = weekly_to_entries(weekly);
        self.summarize_at(Some(entries.as_slice()), now)
    }
}
