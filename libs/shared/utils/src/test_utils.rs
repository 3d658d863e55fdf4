use std::sync::Arc;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub utc_offset_hours: i32,
    pub range_strategy: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: -5,
            range_strategy: "contiguous-run".to_string(),
        }
    }
}

impl TestConfig {
    pub fn sorted_bounds() -> Self {
        Self {
            range_strategy: "sorted-bounds".to_string(),
            ..Self::default()
        }
    }

    pub fn with_offset(utc_offset_hours: i32) -> Self {
        Self {
            utc_offset_hours,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            schedule_utc_offset_hours: self.utc_offset_hours,
            schedule_range_strategy: self.range_strategy.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Fixed instants for driving the "today" lookup deterministically.
pub struct TestClock;

impl TestClock {
    /// Sunday 2024-01-07 at noon UTC.
    pub fn reference_sunday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap()
    }

    /// Noon (in the given offset) of the reference week's day `day_index`,
    /// where 0 is Sunday.
    pub fn noon_on(day_index: u32, utc_offset_hours: i32) -> DateTime<Utc> {
        Self::reference_sunday() + Duration::days(day_index as i64)
            - Duration::hours(utc_offset_hours as i64)
    }
}

pub struct MockScheduleEntries;

impl MockScheduleEntries {
    pub fn entry(day_of_week: i32, start: &str, end: &str, is_active: bool) -> Value {
        json!({
            "dayOfWeek": day_of_week,
            "startTime": start,
            "endTime": end,
            "isActive": is_active
        })
    }

    pub fn weekdays_nine_to_five() -> Value {
        Value::Array((1..=5).map(|day| Self::entry(day, "09:00", "17:00", true)).collect())
    }

    pub fn all_closed() -> Value {
        Value::Array((0..=6).map(|day| Self::entry(day, "09:00", "17:00", false)).collect())
    }

    pub fn mixed_hours() -> Value {
        json!([
            Self::entry(1, "09:00", "17:00", true),
            Self::entry(2, "10:00", "14:00", true),
        ])
    }

    pub fn weekly_availability() -> Value {
        let open = json!({ "enabled": true, "startTime": "08:00", "endTime": "16:00" });
        let closed = json!({ "enabled": false, "startTime": null, "endTime": null });
        json!({
            "monday": open,
            "tuesday": open,
            "wednesday": open,
            "thursday": open,
            "friday": open,
            "saturday": closed,
            "sunday": closed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset};

    #[test]
    fn test_config_creation() {
        let app_config = TestConfig::default().to_app_config();

        assert_eq!(app_config.schedule_utc_offset_hours, -5);
        assert_eq!(app_config.schedule_range_strategy, "contiguous-run");
        assert!(app_config.is_configured());
    }

    #[test]
    fn test_noon_on_lands_on_requested_weekday() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        for day in 0..7 {
            let local = TestClock::noon_on(day, -5).with_timezone(&offset);
            assert_eq!(local.weekday().num_days_from_sunday(), day);
        }
    }

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(MockScheduleEntries::weekdays_nine_to_five().as_array().unwrap().len(), 5);
        assert_eq!(MockScheduleEntries::all_closed().as_array().unwrap().len(), 7);
        assert!(MockScheduleEntries::weekly_availability()["monday"]["enabled"].as_bool().unwrap());
    }
}
