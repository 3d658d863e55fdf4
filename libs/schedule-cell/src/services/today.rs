use chrono::{DateTime, Datelike, FixedOffset, Utc};
use tracing::debug;

use crate::models::{ActiveEntry, CLOSED_TODAY_LABEL};

/// Sunday-first weekday of `now` as seen from `offset`.
pub fn today_index(now: DateTime<Utc>, offset: FixedOffset) -> u8 {
    now.with_timezone(&offset).weekday().num_days_from_sunday() as u8
}

/// Label with the hours for `today`, or the closed sentinel.
pub fn label_for_day(entries: &[ActiveEntry], today: u8) -> String {
    match entries.iter().find(|entry| entry.day == today) {
        Some(entry) => format!("Hoy: {} - {}", entry.start, entry.end),
        None => CLOSED_TODAY_LABEL.to_string(),
    }
}

/// Label for a week with mixed hours: only today's hours are shown.
///
/// The result depends on `now`, so it is only valid until the next day
/// boundary in `offset`.
pub fn resolve_today_label(entries: &[ActiveEntry], now: DateTime<Utc>, offset: FixedOffset) -> String {
    let today = today_index(now, offset);
    debug!("Resolved today as day {} (offset {})", today, offset);
    label_for_day(entries, today)
}
