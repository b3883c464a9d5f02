use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use super::{ClubRepository, PlayerRepository, StoreError, StoreResult, TripRepository};
use crate::models::*;

const SCHEMA: &str = include_str!("schema.sql");

const CLUB_COLUMNS: &str = "id, name, state";
const PLAYER_COLUMNS: &str = "id, name, birth_date, salary, nationality, club_id, position";
const TRIP_COLUMNS: &str = "id, destination, transport, price, duration";

/// sqlx-backed store shared by every repository trait
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connects to `database_url`, creating the database file if needed.
    /// Foreign keys are enforced on every connection.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Single-connection in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // Every connection to :memory: is a separate database, so keep exactly one alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Creates missing tables. Safe to run on every start.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ClubRepository for SqliteStore {
    async fn list_clubs(&self) -> StoreResult<Vec<Club>> {
        let clubs = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(clubs)
    }

    async fn create_club(&self, club: &ClubInput) -> StoreResult<Club> {
        let created = sqlx::query_as::<_, Club>(&format!(
            "INSERT INTO clubs (name, state) VALUES (?, ?) RETURNING {CLUB_COLUMNS}"
        ))
        .bind(&club.name)
        .bind(&club.state)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_club(&self, id: i64, club: &ClubInput) -> StoreResult<Club> {
        sqlx::query_as::<_, Club>(&format!(
            "UPDATE clubs SET name = ?, state = ? WHERE id = ? RETURNING {CLUB_COLUMNS}"
        ))
        .bind(&club.name)
        .bind(&club.state)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete_club(&self, id: i64) -> StoreResult<Club> {
        sqlx::query_as::<_, Club>(&format!(
            "DELETE FROM clubs WHERE id = ? RETURNING {CLUB_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl PlayerRepository for SqliteStore {
    async fn list_players(&self) -> StoreResult<Vec<PlayerClubRow>> {
        let rows = sqlx::query_as::<_, PlayerClubRow>(
            r#"SELECT
                   p.id,
                   p.name,
                   p.birth_date,
                   p.salary,
                   p.nationality,
                   p.club_id,
                   p.position,
                   c.name AS club_name,
                   c.state AS club_state
               FROM players p
               JOIN clubs c ON c.id = p.club_id
               ORDER BY p.id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create_player(&self, player: &PlayerInput) -> StoreResult<Player> {
        let created = sqlx::query_as::<_, Player>(&format!(
            r#"INSERT INTO players (name, birth_date, salary, nationality, club_id, position)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING {PLAYER_COLUMNS}"#
        ))
        .bind(&player.name)
        .bind(player.birth_date)
        .bind(player.salary)
        .bind(&player.nationality)
        .bind(player.club_id)
        .bind(&player.position)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_player(&self, id: i64, player: &PlayerInput) -> StoreResult<Player> {
        sqlx::query_as::<_, Player>(&format!(
            r#"UPDATE players
               SET name = ?, birth_date = ?, salary = ?, nationality = ?, club_id = ?, position = ?
               WHERE id = ?
               RETURNING {PLAYER_COLUMNS}"#
        ))
        .bind(&player.name)
        .bind(player.birth_date)
        .bind(player.salary)
        .bind(&player.nationality)
        .bind(player.club_id)
        .bind(&player.position)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn patch_player(&self, id: i64, patch: &PlayerPatch) -> StoreResult<Player> {
        if patch.is_empty() {
            return sqlx::query_as::<_, Player>(&format!(
                "SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?"
            ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE players SET ");
        let mut assignments = builder.separated(", ");
        if let Some(name) = &patch.name {
            assignments.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(birth_date) = patch.birth_date {
            assignments.push("birth_date = ").push_bind_unseparated(birth_date);
        }
        if let Some(salary) = patch.salary {
            assignments.push("salary = ").push_bind_unseparated(salary);
        }
        if let Some(nationality) = &patch.nationality {
            assignments.push("nationality = ").push_bind_unseparated(nationality.clone());
        }
        if let Some(club_id) = patch.club_id {
            assignments.push("club_id = ").push_bind_unseparated(club_id);
        }
        if let Some(position) = &patch.position {
            assignments.push("position = ").push_bind_unseparated(position.clone());
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {PLAYER_COLUMNS}"));

        builder
            .build_query_as::<Player>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_player(&self, id: i64) -> StoreResult<Player> {
        sqlx::query_as::<_, Player>(&format!(
            "DELETE FROM players WHERE id = ? RETURNING {PLAYER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl TripRepository for SqliteStore {
    async fn list_trips(&self) -> StoreResult<Vec<Trip>> {
        let trips = sqlx::query_as::<_, Trip>(&format!(
            "SELECT {TRIP_COLUMNS} FROM trips ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    async fn create_trip(&self, trip: &TripInput) -> StoreResult<Trip> {
        let created = sqlx::query_as::<_, Trip>(&format!(
            r#"INSERT INTO trips (destination, transport, price, duration)
               VALUES (?, ?, ?, ?)
               RETURNING {TRIP_COLUMNS}"#
        ))
        .bind(&trip.destination)
        .bind(trip.transport)
        .bind(trip.price)
        .bind(trip.duration)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_trip(&self, id: i64, trip: &TripInput) -> StoreResult<Trip> {
        sqlx::query_as::<_, Trip>(&format!(
            r#"UPDATE trips
               SET destination = ?, transport = ?, price = ?, duration = ?
               WHERE id = ?
               RETURNING {TRIP_COLUMNS}"#
        ))
        .bind(&trip.destination)
        .bind(trip.transport)
        .bind(trip.price)
        .bind(trip.duration)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete_trip(&self, id: i64) -> StoreResult<Trip> {
        sqlx::query_as::<_, Trip>(&format!(
            "DELETE FROM trips WHERE id = ? RETURNING {TRIP_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn trips_by_transport(&self, transport: Transport) -> StoreResult<Vec<Trip>> {
        let trips = sqlx::query_as::<_, Trip>(&format!(
            "SELECT {TRIP_COLUMNS} FROM trips WHERE transport = ? ORDER BY id"
        ))
        .bind(transport)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    async fn trips_up_to_price(&self, max_price: f64) -> StoreResult<Vec<Trip>> {
        let trips = sqlx::query_as::<_, Trip>(&format!(
            "SELECT {TRIP_COLUMNS} FROM trips WHERE price <= ? ORDER BY id"
        ))
        .bind(max_price)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    async fn trips_by_destination(&self) -> StoreResult<Vec<TripDigest>> {
        let digests = sqlx::query_as::<_, TripDigest>(
            r#"SELECT destination, price, duration FROM trips ORDER BY destination ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(digests)
    }

    async fn trip_averages(&self) -> StoreResult<TripAggregate> {
        let aggregate = sqlx::query_as::<_, TripAggregate>(
            r#"SELECT AVG(price) AS avg_price, AVG(duration) AS avg_duration FROM trips"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(aggregate)
    }
}
