use tracing::debug;

use crate::models::{DayAvailability, ScheduleEntry, ScheduleError, TimeValue, WeeklyAvailability};
use crate::services::normalizer::validate_day_index;
use crate::services::time_format::format_time;

/// One entry per weekday, Sunday first. Disabled days become inactive
/// entries and keep whatever times the slot carried.
pub fn weekly_to_entries(weekly: &WeeklyAvailability) -> Vec<ScheduleEntry> {
    (0u8..7)
        .filter_map(|day| weekly.day(day).map(|slot| (day, slot)))
        .map(|(day, slot)| ScheduleEntry {
            day_of_week: day as i32,
            start_time: slot.start_time.clone().map(TimeValue::Text),
            end_time: slot.end_time.clone().map(TimeValue::Text),
            is_active: slot.enabled,
        })
        .collect()
}

fn time_to_slot(value: Option<&TimeValue>) -> Option<String> {
    match value? {
        TimeValue::Text(raw) => Some(raw.clone()),
        timestamp @ TimeValue::Timestamp(_) => Some(format_time(Some(timestamp))),
        TimeValue::Other(_) => None,
    }
}

/// Fold a flat entry list back into the 7-slot form.
///
/// Days with no entry come back disabled with no times. Text times are kept
/// verbatim so `weekly_to_entries` followed by this is the identity.
pub fn entries_to_weekly(entries: &[ScheduleEntry]) -> Result<WeeklyAvailability, ScheduleError> {
    let mut weekly = WeeklyAvailability::default();
    let mut seen = [false; 7];

    for entry in entries {
        let day = validate_day_index(entry.day_of_week)?;
        if std::mem::replace(&mut seen[day as usize], true) {
            return Err(ScheduleError::DuplicateDay(day));
        }

        if let Some(slot) = weekly.day_mut(day) {
            *slot = DayAvailability {
                enabled: entry.is_active,
                start_time: time_to_slot(entry.start_time.as_ref()),
                end_time: time_to_slot(entry.end_time.as_ref()),
            };
        }
    }

    debug!("Converted {} entries into weekly availability", entries.len());
    Ok(weekly)
}

impl WeeklyAvailability {
    pub fn to_entries(&self) -> Vec<ScheduleEntry> {
        weekly_to_entries(self)
    }

    pub fn from_entries(entries: &[ScheduleEntry]) -> Result<Self, ScheduleError> {
        entries_to_weekly(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::DateTime;

    fn clinic_week() -> WeeklyAvailability {
        WeeklyAvailability {
            monday: DayAvailability::open("08:00", "16:00"),
            tuesday: DayAvailability::open("08:00", "16:00"),
            wednesday: DayAvailability::open("09:30:00", "13:00:00"),
            thursday: DayAvailability {
                enabled: false,
                start_time: Some("08:00".to_string()),
                end_time: Some("12:00".to_string()),
            },
            friday: DayAvailability::open("08:00", "16:00"),
            saturday: DayAvailability::default(),
            sunday: DayAvailability::default(),
        }
    }

    #[test]
    fn test_weekly_to_entries_is_sunday_first() {
        let entries = weekly_to_entries(&clinic_week());

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], ScheduleEntry::closed(0));
        assert_eq!(entries[1], ScheduleEntry::open(1, "08:00", "16:00"));
        assert!(!entries[4].is_active);
        assert_eq!(entries[4].start_time, Some(TimeValue::Text("08:00".to_string())));
    }

    #[test]
    fn test_round_trip_is_identity() {
        let weekly = clinic_week();
        let back = entries_to_weekly(&weekly.to_entries()).unwrap();
        assert_eq!(back, weekly);

        let empty = WeeklyAvailability::default();
        assert_eq!(WeeklyAvailability::from_entries(&empty.to_entries()).unwrap(), empty);
    }

    #[test]
    fn test_json_round_trip_keeps_timestamp_text() {
        let weekly = WeeklyAvailability {
            monday: DayAvailability::open("2024-01-01T09:00:00Z", "2024-01-01T17:00:00Z"),
            ..clinic_week()
        };

        let json = serde_json::to_value(weekly_to_entries(&weekly)).unwrap();
        let entries: Vec<ScheduleEntry> = serde_json::from_value(json).unwrap();
        assert_eq!(entries[1].start_time, Some(TimeValue::Text("2024-01-01T09:00:00Z".to_string())));

        assert_eq!(entries_to_weekly(&entries).unwrap(), weekly);
    }

    #[test]
    fn test_non_string_times_become_empty_slots() {
        let entries: Vec<ScheduleEntry> = serde_json::from_str(
            r#"[{"dayOfWeek": 2, "startTime": 900, "endTime": "17:00", "isActive": true}]"#,
        ).unwrap();
        let weekly = entries_to_weekly(&entries).unwrap();

        assert!(weekly.tuesday.enabled);
        assert_eq!(weekly.tuesday.start_time, None);
        assert_eq!(weekly.tuesday.end_time, Some("17:00".to_string()));
    }

    #[test]
    fn test_missing_days_are_disabled() {
        let weekly = entries_to_weekly(&[ScheduleEntry::open(6, "10:00", "14:00")]).unwrap();

        assert_eq!(weekly.saturday, DayAvailability::open("10:00", "14:00"));
        assert_eq!(weekly.sunday, DayAvailability::default());
        assert_eq!(weekly.monday, DayAvailability::default());
    }

    #[test]
    fn test_timestamps_become_hh_mm() {
        let start = DateTime::parse_from_rfc3339("1970-01-01T07:45:00Z").unwrap();
        let end = DateTime::parse_from_rfc3339("1970-01-01T15:00:00Z").unwrap();
        let weekly = entries_to_weekly(&[ScheduleEntry::open(3, start, end)]).unwrap();

        assert_eq!(weekly.wednesday, DayAvailability::open("07:45", "15:00"));
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        assert_matches!(
            entries_to_weekly(&[ScheduleEntry::closed(9)]),
            Err(ScheduleError::InvalidDayIndex(9))
        );
        assert_matches!(
            entries_to_weekly(&[ScheduleEntry::closed(1), ScheduleEntry::open(1, "08:00", "09:00")]),
            Err(ScheduleError::DuplicateDay(1))
        );
    }
}
