//! Categories API endpoints.

use api_types::category::{CategoryCreate, CategoryCreated, CategoryListResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Stored names, or the defaults while none exist.
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<CategoryListResponse>, ServerError> {
    let choices = state.engine.category_choices().await?;

    Ok(Json(CategoryListResponse {
        categories: choices.names,
        defaults: choices.defaults,
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<CategoryCreated>), ServerError> {
    let id = state.engine.add_category(&payload.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(CategoryCreated {
            id,
            name: payload.name.trim().to_string(),
        }),
    ))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_category(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
