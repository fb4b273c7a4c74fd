//! Recipe API endpoints.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::{file_response, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateRecipeRequest, Recipe};
use crate::AppState;

/// GET /api/recipes - List recipe metadata, newest upload first.
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Vec<Recipe>> {
    let recipes = state.repo.list_recipes().await?;
    success(recipes)
}

/// POST /api/recipes - Upload a recipe file (base64 payload).
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> ApiResult<Recipe> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Recipe name is required".to_string()));
    }
    if request.file_name.trim().is_empty() {
        return Err(AppError::Validation("File name is required".to_string()));
    }

    let file_data = BASE64
        .decode(&request.file_data)
        .map_err(|e| AppError::Validation(format!("Invalid base64 file data: {}", e)))?;

    let recipe = state.repo.create_recipe(&request, &file_data).await?;
    tracing::info!(
        "Uploaded recipe {} ({}, {} bytes)",
        recipe.id,
        recipe.file_name,
        file_data.len()
    );
    success(recipe)
}

/// GET /api/recipes/:id/file - Download the stored file bytes.
pub async fn download_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.repo.get_recipe_file(&id).await? {
        Some((file_name, bytes)) => Ok(file_response(&file_name, bytes)),
        None => Err(AppError::NotFound(format!("Recipe {} not found", id))),
    }
}

/// DELETE /api/recipes/:id - Delete a recipe.
pub async fn delete_recipe(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_recipe(&id).await?;
    tracing::info!("Deleted recipe {}", id);
    success(())
}
