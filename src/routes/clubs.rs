use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::Club;
use crate::routes::AppState;
use crate::{mapper, validation};

// GET /clubes - List all clubs, newest first
pub async fn list_clubs(State(state): State<AppState>) -> Result<Json<Vec<Club>>, ApiError> {
    let clubs = state.clubs.list_clubs().await.map_err(|e| {
        tracing::error!("Failed to list clubs: {}", e);
        ApiError::read(e)
    })?;

    Ok(Json(clubs))
}

// POST /clubes - Create a club
pub async fn create_club(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Club>), ApiError> {
    let input = validation::club(&body).inspect_err(|issues| {
        tracing::debug!("Rejected club payload: {:?}", issues);
    })?;

    let club = state.clubs.create_club(&input).await.map_err(|e| {
        tracing::error!("Failed to create club: {}", e);
        ApiError::write(e)
    })?;

    Ok((StatusCode::CREATED, Json(club)))
}

// PUT /clubes/:id - Replace a club's name and state
pub async fn update_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Club>, ApiError> {
    let input = validation::club(&body).inspect_err(|issues| {
        tracing::debug!("Rejected club update: {:?}", issues);
    })?;
    let id = mapper::parse_id(&id).map_err(ApiError::write)?;

    let club = state.clubs.update_club(id, &input).await.map_err(|e| {
        tracing::error!("Failed to update club {}: {}", id, e);
        ApiError::write(e)
    })?;

    Ok(Json(club))
}

// DELETE /clubes/:id - Delete a club, returning what was stored
pub async fn delete_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Club>, ApiError> {
    let id = mapper::parse_id(&id).map_err(ApiError::write)?;

    let club = state.clubs.delete_club(id).await.map_err(|e| {
        tracing::error!("Failed to delete club {}: {}", id, e);
        ApiError::write(e)
    })?;

    Ok(Json(club))
}
