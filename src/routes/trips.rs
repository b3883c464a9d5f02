use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{Trip, TripDigest, TripSummary};
use crate::routes::AppState;
use crate::{mapper, validation};

// GET /viagens - List all trips, newest first
pub async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, ApiError> {
    let trips = state.trips.list_trips().await.map_err(|e| {
        tracing::error!("Failed to list trips: {}", e);
        ApiError::read(e)
    })?;

    Ok(Json(trips))
}

// POST /viagens
pub async fn create_trip(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Trip>), ApiError> {
    let input = validation::trip(&body).inspect_err(|issues| {
        tracing::debug!("Rejected trip payload: {:?}", issues);
    })?;

    let trip = state.trips.create_trip(&input).await.map_err(|e| {
        tracing::error!("Failed to create trip: {}", e);
        ApiError::write(e)
    })?;

    Ok((StatusCode::CREATED, Json(trip)))
}

// PUT /viagens/:id
pub async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Trip>, ApiError> {
    let input = validation::trip(&body).inspect_err(|issues| {
        tracing::debug!("Rejected trip update: {:?}", issues);
    })?;
    let id = mapper::parse_id(&id).map_err(ApiError::write)?;

    let trip = state.trips.update_trip(id, &input).await.map_err(|e| {
        tracing::error!("Failed to update trip {}: {}", id, e);
        ApiError::write(e)
    })?;

    Ok(Json(trip))
}

// DELETE /viagens/:id
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trip>, ApiError> {
    let id = mapper::parse_id(&id).map_err(ApiError::write)?;

    let trip = state.trips.delete_trip(id).await.map_err(|e| {
        tracing::error!("Failed to delete trip {}: {}", id, e);
        ApiError::write(e)
    })?;

    Ok(Json(trip))
}

// GET /viagens/transporte/:transp - Trips using one transport mode
pub async fn trips_by_transport(
    State(state): State<AppState>,
    Path(transp): Path<String>,
) -> Result<Json<Vec<Trip>>, ApiError> {
    // An unknown mode is a failed read, as any other lookup failure here
    let transport = mapper::parse_transport(&transp).map_err(ApiError::read)?;

    let trips = state.trips.trips_by_transport(transport).await.map_err(|e| {
        tracing::error!("Failed to list trips by transport {}: {}", transp, e);
        ApiError::read(e)
    })?;

    Ok(Json(trips))
}

// GET /viagens/preco/:maximo - Trips priced at or below the bound
pub async fn trips_up_to_price(
    State(state): State<AppState>,
    Path(maximo): Path<String>,
) -> Result<Json<Vec<Trip>>, ApiError> {
    let max_price = mapper::parse_price_bound(&maximo).map_err(ApiError::read)?;

    let trips = state.trips.trips_up_to_price(max_price).await.map_err(|e| {
        tracing::error!("Failed to list trips up to {}: {}", max_price, e);
        ApiError::read(e)
    })?;

    Ok(Json(trips))
}

// GET /viagens/destino/ordem - Destination, price and duration ordered by destination
pub async fn trips_by_destination(
    State(state): State<AppState>,
) -> Result<Json<Vec<TripDigest>>, ApiError> {
    let digests = state.trips.trips_by_destination().await.map_err(|e| {
        tracing::error!("Failed to list trips by destination: {}", e);
        ApiError::read(e)
    })?;

    Ok(Json(digests))
}

// GET /viagens/resumo/media - Average price and duration
pub async fn trip_averages(State(state): State<AppState>) -> Result<Json<TripSummary>, ApiError> {
    let aggregate = state.trips.trip_averages().await.map_err(|e| {
        tracing::error!("Failed to aggregate trips: {}", e);
        ApiError::read(e)
    })?;

    Ok(Json(mapper::trip_summary(aggregate)))
}
