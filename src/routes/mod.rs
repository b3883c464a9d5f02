use std::sync::Arc;

use crate::db::{ClubRepository, PlayerRepository, SqliteStore, TripRepository};

pub mod clubs;
pub mod health;
pub mod players;
pub mod trips;

/// Persistence handles shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub clubs: Arc<dyn ClubRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub trips: Arc<dyn TripRepository>,
}

impl AppState {
    /// One store behind all three repositories
    pub fn from_store(store: SqliteStore) -> Self {
        let store = Arc::new(store);
        Self {
            clubs: store.clone(),
            players: store.clone(),
            trips: store,
        }
    }
}
