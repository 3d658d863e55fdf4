use chrono::{DateTime, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::models::TimeValue;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Extract the time-of-day component from a bare time or a timestamp string.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(raw, format) {
            return Some(time);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.time());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.time())
}

/// Render a time value as 24-hour `HH:MM`.
///
/// Missing or unparsable values come back as an empty string so that one bad
/// row never takes down the whole label.
pub fn format_time(value: Option<&TimeValue>) -> String {
    let time = match value {
        Some(TimeValue::Timestamp(timestamp)) => Some(timestamp.time()),
        Some(TimeValue::Text(raw)) => {
            let parsed = parse_time_of_day(raw);
            if parsed.is_none() {
                warn!("Unparsable schedule time '{}', rendering as empty", raw);
            }
            parsed
        }
        Some(TimeValue::Other(raw)) => {
            warn!("Schedule time {} is not a string, rendering as empty", raw);
            None
        }
        None => None,
    };

    time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn text(raw: &str) -> TimeValue {
        TimeValue::Text(raw.to_string())
    }

    #[test]
    fn test_bare_times_normalize_to_hh_mm() {
        assert_eq!(format_time(Some(&text("09:00"))), "09:00");
        assert_eq!(format_time(Some(&text("09:00:00"))), "09:00");
        assert_eq!(format_time(Some(&text("17:30:45.123"))), "17:30");
        assert_eq!(format_time(Some(&text(" 08:15 "))), "08:15");
    }

    #[test]
    fn test_timestamp_strings_keep_time_of_day() {
        assert_eq!(format_time(Some(&text("1970-01-01T09:00:00Z"))), "09:00");
        assert_eq!(format_time(Some(&text("2024-03-04T18:45:00-05:00"))), "18:45");
        assert_eq!(format_time(Some(&text("2024-03-04 07:05:00"))), "07:05");
        assert_eq!(format_time(Some(&text("2024-03-04T22:10:00.000"))), "22:10");
    }

    #[test]
    fn test_timestamp_variant() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let timestamp = offset.with_ymd_and_hms(2024, 1, 1, 13, 20, 0).unwrap();
        assert_eq!(format_time(Some(&TimeValue::Timestamp(timestamp))), "13:20");
    }

    #[test]
    fn test_unparsable_and_missing_degrade_to_empty() {
        assert_eq!(format_time(Some(&text("soon"))), "");
        assert_eq!(format_time(Some(&text("25:00"))), "");
        assert_eq!(format_time(Some(&text(""))), "");
        assert_eq!(format_time(None), "");
        assert_eq!(format_time(Some(&TimeValue::Other(serde_json::json!(900)))), "");
    }
}
