//! Calendar view endpoint.

use axum::extract::State;
use chrono::Local;

use super::{success, ApiResult};
use crate::calendar::{display_window, expand_feed};
use crate::errors::AppError;
use crate::models::CalendarOccurrence;
use crate::AppState;

/// GET /api/calendar - Fetch the configured feed and expand it into
/// concrete occurrences.
pub async fn get_calendar(State(state): State<AppState>) -> ApiResult<Vec<CalendarOccurrence>> {
    let url = state
        .config
        .feed_url
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No calendar feed configured".to_string()))?;

    let ics = state.feed.fetch(url).await?;

    // Window boundaries are recomputed on every request, not cached.
    let (window_start, window_end) = display_window(Local::now());
    let occurrences = expand_feed(&ics, window_start, window_end)?;

    tracing::debug!("Expanded feed into {} occurrences", occurrences.len());
    success(occurrences)
}
