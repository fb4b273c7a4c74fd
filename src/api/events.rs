//! Event API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateEventRequest, Event};
use crate::AppState;

/// GET /api/events - List all events, soonest first.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    let events = state.repo.list_events().await?;
    success(events)
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Event> {
    match state.repo.get_event(&id).await? {
        Some(event) => success(event),
        None => Err(AppError::NotFound(format!("Event {} not found", id))),
    }
}

/// POST /api/events - Create a new event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<Event> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Event name is required".to_string()));
    }

    let event = state.repo.create_event(&request).await?;
    tracing::info!("Created event {} ({})", event.id, event.name);
    success(event)
}

/// DELETE /api/events/:id - Delete an event and its RSVPs.
pub async fn delete_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_event(&id).await?;
    tracing::info!("Deleted event {}", id);
    success(())
}
