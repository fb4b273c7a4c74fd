//! Schedule view endpoint.

use axum::extract::State;
use chrono::Utc;

use super::{success, ApiResult};
use crate::schedule::{build_schedule, Schedule};
use crate::AppState;

/// GET /api/schedule - The grouped upcoming/past event view.
///
/// Recomputed from the full event and RSVP collections on every request.
pub async fn get_schedule(State(state): State<AppState>) -> ApiResult<Schedule> {
    let events = state.repo.list_events().await?;
    let rsvps = state.repo.list_rsvps().await?;

    success(build_schedule(&events, &rsvps, Utc::now()))
}
