use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{RangeStrategy, ScheduleEntry, ScheduleError, SummaryOptions, WeeklyAvailability};
use crate::services::{
    conversion::{entries_to_weekly, weekly_to_entries},
    summarizer::ScheduleSummarizer,
};

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::UnknownRangeStrategy(_) => AppError::BadRequest(err.to_string()),
            _ => AppError::ValidationError(err.to_string()),
        }
    }
}

// Query parameters shared by the summary endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub utc_offset_hours: Option<i32>,
    pub strategy: Option<String>,
    pub at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntriesPayload {
    #[serde(default)]
    pub entries: Option<Vec<ScheduleEntry>>,
}

/// Config defaults, overridden by whatever the query carries.
fn build_summarizer(state: &AppConfig, query: &SummaryQuery) -> Result<ScheduleSummarizer, AppError> {
    let mut options = SummaryOptions::from_config(state);

    if let Some(hours) = query.utc_offset_hours {
        options.utc_offset = (-23..=23)
            .contains(&hours)
            .then(|| FixedOffset::east_opt(hours * 3600))
            .flatten()
            .ok_or_else(|| AppError::BadRequest(format!("utcOffsetHours must be between -23 and 23, got {}", hours)))?;
    }

    if let Some(strategy) = &query.strategy {
        options.range_strategy = strategy.parse::<RangeStrategy>()?;
    }

    Ok(ScheduleSummarizer::with_options(options))
}

// ==============================================================================
// SUMMARY HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn summarize_entries(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<SummaryQuery>,
    Json(payload): Json<EntriesPayload>,
) -> Result<Json<Value>, AppError> {
    let summarizer = build_summarizer(&state, &query)?;
    let now = query.at.unwrap_or_else(Utc::now);

    debug!(
        "Summarizing {} schedule entries at {}",
        payload.entries.as_ref().map_or(0, Vec::len),
        now
    );

    let summary = summarizer.summarize_at(payload.entries.as_deref(), now)?;

    Ok(Json(json!({
        "summary": summary
    })))
}

#[axum::debug_handler]
pub async fn summarize_weekly(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<SummaryQuery>,
    Json(weekly): Json<WeeklyAvailability>,
) -> Result<Json<Value>, AppError> {
    let summarizer = build_summarizer(&state, &query)?;
    let now = query.at.unwrap_or_else(Utc::now);

    debug!("Summarizing weekly availability at {}", now);

    let summary = summarizer.summarize_weekly_at(&weekly, now)?;

    Ok(Json(json!({
        "summary": summary
    })))
}

// ==============================================================================
// CONVERSION HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn convert_to_entries(
    Json(weekly): Json<WeeklyAvailability>,
) -> Result<Json<Value>, AppError> {
    let entries = weekly_to_entries(&weekly);

    Ok(Json(json!({
        "entries": entries
    })))
}

#[axum::debug_handler]
pub async fn convert_to_weekly(
    Json(payload): Json<EntriesPayload>,
) -> Result<Json<WeeklyAvailability>, AppError> {
    let entries = payload.entries.unwrap_or_default();
    let weekly = entries_to_weekly(&entries)?;

    Ok(Json(weekly))
}
