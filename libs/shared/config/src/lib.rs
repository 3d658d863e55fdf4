use std::env;
use chrono::FixedOffset;
use tracing::warn;

pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -5;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Hours added to UTC to decide which weekday counts as "today".
    pub schedule_utc_offset_hours: i32,
    /// Raw range strategy name, parsed by the schedule cell.
    pub schedule_range_strategy: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            schedule_utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            schedule_range_strategy: "contiguous-run".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| {
                    warn!("HOST not set, using default");
                    DEFAULT_HOST.to_string()
                }),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT '{}' is not a valid port, using default", raw);
                    DEFAULT_PORT
                }),
                Err(_) => {
                    warn!("PORT not set, using default");
                    DEFAULT_PORT
                }
            },
            schedule_utc_offset_hours: match env::var("SCHEDULE_UTC_OFFSET_HOURS") {
                Ok(raw) => parse_offset_hours(&raw).unwrap_or_else(|| {
                    warn!("SCHEDULE_UTC_OFFSET_HOURS '{}' is out of range, using default", raw);
                    DEFAULT_UTC_OFFSET_HOURS
                }),
                Err(_) => {
                    warn!("SCHEDULE_UTC_OFFSET_HOURS not set, using default");
                    DEFAULT_UTC_OFFSET_HOURS
                }
            },
            schedule_range_strategy: env::var("SCHEDULE_RANGE_STRATEGY")
                .unwrap_or_else(|_| {
                    warn!("SCHEDULE_RANGE_STRATEGY not set, using default");
                    "contiguous-run".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Schedule configuration incomplete - falling back to defaults where needed");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
            && self.utc_offset().is_some()
            && !self.schedule_range_strategy.is_empty()
    }

    pub fn utc_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.schedule_utc_offset_hours * 3600)
    }
}

/// `DEFAULT_UTC_OFFSET_HOURS` as a `FixedOffset`.
pub fn default_utc_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600)
        .expect("DEFAULT_UTC_OFFSET_HOURS is within a day")
}

/// Whole-hour offsets only; anything a `FixedOffset` can't hold is rejected.
pub fn parse_offset_hours(raw: &str) -> Option<i32> {
    let hours: i32 = raw.trim().parse().ok()?;
    if (-23..=23).contains(&hours) {
        Some(hours)
    } else {
        None
    }
}
