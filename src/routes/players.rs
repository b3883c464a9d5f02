use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{Player, PlayerListing};
use crate::routes::AppState;
use crate::{mapper, validation};

// GET /jogadores - List players with their club and computed age
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerListing>>, ApiError> {
    let rows = state.players.list_players().await.map_err(|e| {
        tracing::error!("Failed to list players: {}", e);
        ApiError::read(e)
    })?;

    let year = mapper::current_year();
    let players: Vec<PlayerListing> = rows.into_iter().map(|row| row.to_listing(year)).collect();

    Ok(Json(players))
}

// POST /jogadores - Create a player
pub async fn create_player(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let input = validation::player(&body).inspect_err(|issues| {
        tracing::debug!("Rejected player payload: {:?}", issues);
    })?;

    let player = state.players.create_player(&input).await.map_err(|e| {
        tracing::error!("Failed to create player: {}", e);
        ApiError::write(e)
    })?;

    Ok((StatusCode::CREATED, Json(player)))
}

// PUT /jogadores/:id - Replace every player field
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Player>, ApiError> {
    let input = validation::player(&body).inspect_err(|issues| {
        tracing::debug!("Rejected player update: {:?}", issues);
    })?;
    let id = mapper::parse_id(&id).map_err(ApiError::write)?;

    let player = state.players.update_player(id, &input).await.map_err(|e| {
        tracing::error!("Failed to update player {}: {}", id, e);
        ApiError::write(e)
    })?;

    Ok(Json(player))
}

// PATCH /jogadores/:id - Update only the supplied fields
pub async fn patch_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Player>, ApiError> {
    let patch = validation::player_patch(&body).inspect_err(|issues| {
        tracing::debug!("Rejected player patch: {:?}", issues);
    })?;
    let id = mapper::parse_id(&id).map_err(ApiError::write)?;

    let player = state.players.patch_player(id, &patch).await.map_err(|e| {
        tracing::error!("Failed to patch player {}: {}", id, e);
        ApiError::write(e)
    })?;

    Ok(Json(player))
}

// DELETE /jogadores/:id - Delete a player, returning what was stored
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let id = mapper::parse_id(&id).map_err(ApiError::write)?;

    let player = state.players.delete_player(id).await.map_err(|e| {
        tracing::error!("Failed to delete player {}: {}", id, e);
        ApiError::write(e)
    })?;

    Ok(Json(player))
}
