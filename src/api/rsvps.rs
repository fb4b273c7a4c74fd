//! RSVP API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateRsvpRequest, Rsvp};
use crate::AppState;

/// GET /api/rsvps - List all RSVPs, newest first.
pub async fn list_rsvps(State(state): State<AppState>) -> ApiResult<Vec<Rsvp>> {
    let rsvps = state.repo.list_rsvps().await?;
    success(rsvps)
}

/// POST /api/rsvps - Create a new RSVP.
///
/// The attendance value is validated by deserialization: anything outside
/// the closed enumeration is rejected before it reaches the store.
pub async fn create_rsvp(
    State(state): State<AppState>,
    Json(request): Json<CreateRsvpRequest>,
) -> ApiResult<Rsvp> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let rsvp = state.repo.create_rsvp(&request).await?;
    tracing::info!("Created RSVP {} for event {}", rsvp.id, rsvp.event_id);
    success(rsvp)
}

/// DELETE /api/rsvps/:id - Delete an RSVP.
pub async fn delete_rsvp(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_rsvp(&id).await?;
    tracing::info!("Deleted RSVP {}", id);
    success(())
}
