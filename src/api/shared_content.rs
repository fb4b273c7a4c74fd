//! Shared tech content API endpoints.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::{file_response, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateSharedContentRequest, SharedContent};
use crate::AppState;

/// GET /api/shared-content - List shared content metadata, newest upload first.
pub async fn list_shared_content(State(state): State<AppState>) -> ApiResult<Vec<SharedContent>> {
    let content = state.repo.list_shared_content().await?;
    success(content)
}

/// POST /api/shared-content - Upload a shared content file (base64 payload).
pub async fn create_shared_content(
    State(state): State<AppState>,
    Json(request): Json<CreateSharedContentRequest>,
) -> ApiResult<SharedContent> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if request.file_name.trim().is_empty() {
        return Err(AppError::Validation("File name is required".to_string()));
    }

    let file_data = BASE64
        .decode(&request.file_data)
        .map_err(|e| AppError::Validation(format!("Invalid base64 file data: {}", e)))?;

    let content = state.repo.create_shared_content(&request, &file_data).await?;
    tracing::info!(
        "Uploaded shared content {} ({}, {} bytes)",
        content.id,
        content.file_name,
        file_data.len()
    );
    success(content)
}

/// GET /api/shared-content/:id/file - Download the stored file bytes.
pub async fn download_shared_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.repo.get_shared_content_file(&id).await? {
        Some((file_name, bytes)) => Ok(file_response(&file_name, bytes)),
        None => Err(AppError::NotFound(format!("Shared content {} not found", id))),
    }
}

/// DELETE /api/shared-content/:id - Delete a shared content entry.
pub async fn delete_shared_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_shared_content(&id).await?;
    tracing::info!("Deleted shared content {}", id);
    success(())
}
