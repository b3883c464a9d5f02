//! Persistence interface consumed by the handlers.
//!
//! Handlers only see these traits; `sqlite::SqliteStore` is the production
//! implementation and is built once at startup.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::*;

pub mod sqlite;

pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    /// Stable machine-readable kind exposed in error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound => "not_found",
            StoreError::Constraint(_) => "constraint_violation",
            StoreError::InvalidKey(_) => "invalid_key",
            StoreError::Database(_) => "database",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => StoreError::Constraint(db_err.message().to_string()),
                _ => StoreError::Database(sqlx::Error::Database(db_err)),
            },
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// All clubs, newest first
    async fn list_clubs(&self) -> StoreResult<Vec<Club>>;
    async fn create_club(&self, club: &ClubInput) -> StoreResult<Club>;
    async fn update_club(&self, id: i64, club: &ClubInput) -> StoreResult<Club>;
    /// Removes the club and returns what was stored
    async fn delete_club(&self, id: i64) -> StoreResult<Club>;
}

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// All players joined with their club, newest first
    async fn list_players(&self) -> StoreResult<Vec<PlayerClubRow>>;
    async fn create_player(&self, player: &PlayerInput) -> StoreResult<Player>;
    async fn update_player(&self, id: i64, player: &PlayerInput) -> StoreResult<Player>;
    /// Writes only the fields present in `patch`
    async fn patch_player(&self, id: i64, patch: &PlayerPatch) -> StoreResult<Player>;
    async fn delete_player(&self, id: i64) -> StoreResult<Player>;
}

#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn list_trips(&self) -> StoreResult<Vec<Trip>>;
    async fn create_trip(&self, trip: &TripInput) -> StoreResult<Trip>;
    async fn update_trip(&self, id: i64, trip: &TripInput) -> StoreResult<Trip>;
    async fn delete_trip(&self, id: i64) -> StoreResult<Trip>;
    async fn trips_by_transport(&self, transport: Transport) -> StoreResult<Vec<Trip>>;
    /// Trips priced at or below `max_price`
    async fn trips_up_to_price(&self, max_price: f64) -> StoreResult<Vec<Trip>>;
    async fn trips_by_destination(&self) -> StoreResult<Vec<TripDigest>>;
    async fn trip_averages(&self) -> StoreResult<TripAggregate>;
}
