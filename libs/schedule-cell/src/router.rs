use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn schedule_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        // Display summaries
        .route("/summary", post(handlers::summarize_entries))
        .route("/summary/weekly", post(handlers::summarize_weekly))

        // Conversions between the flat list and the weekly map
        .route("/convert/to-entries", post(handlers::convert_to_entries))
        .route("/convert/to-weekly", post(handlers::convert_to_weekly))

        .with_state(state)
}
