use tracing::debug;

use crate::models::{ActiveEntry, NormalizedSchedule, ScheduleEntry, ScheduleError};
use crate::services::time_format::format_time;

/// Checks a raw `day_of_week` against the Sunday-first 0-6 convention.
pub fn validate_day_index(day_of_week: i32) -> Result<u8, ScheduleError> {
    if (0..=6).contains(&day_of_week) {
        Ok(day_of_week as u8)
    } else {
        Err(ScheduleError::InvalidDayIndex(day_of_week))
    }
}

/// Reduce a raw entry collection to its active entries, sorted by day.
///
/// Every entry is validated, inactive ones included, so a bad row is reported
/// even on a week where it would never be rendered.
pub fn normalize_entries(entries: Option<&[ScheduleEntry]>) -> Result<NormalizedSchedule, ScheduleError> {
    let entries = match entries {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            debug!("No schedule entries supplied");
            return Ok(NormalizedSchedule::NotConfigured);
        }
    };

    let mut seen = [false; 7];
    let mut active = Vec::with_capacity(entries.len());

    for entry in entries {
        let day = validate_day_index(entry.day_of_week)?;
        if std::mem::replace(&mut seen[day as usize], true) {
            return Err(ScheduleError::DuplicateDay(day));
        }

        if !entry.is_active {
            continue;
        }

        active.push(ActiveEntry {
            day,
            start: format_time(entry.start_time.as_ref()),
            end: format_time(entry.end_time.as_ref()),
        });
    }

    if active.is_empty() {
        debug!("All {} schedule entries are inactive", entries.len());
        return Ok(NormalizedSchedule::AllClosed);
    }

    active.sort_by_key(|entry| entry.day);
    debug!("Normalized {} active entries out of {}", active.len(), entries.len());

    Ok(NormalizedSchedule::Active(active))
}
