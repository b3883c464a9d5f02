use axum::{
    routing::{get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod mapper;
pub mod models;
pub mod routes;
pub mod validation;

pub use routes::AppState;

/// Build the full router over the given persistence handles
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "API: Cadastro de clubes Brasileirão 2025 - Casa pt2" }))
        .route("/health", get(routes::health::health_check))

        // Club endpoints
        .route("/clubes", get(routes::clubs::list_clubs).post(routes::clubs::create_club))
        .route("/clubes/{id}", put(routes::clubs::update_club).delete(routes::clubs::delete_club))

        // Player endpoints
        .route("/jogadores", get(routes::players::list_players).post(routes::players::create_player))
        .route(
            "/jogadores/{id}",
            put(routes::players::update_player)
                .patch(routes::players::patch_player)
                .delete(routes::players::delete_player),
        )

        // Trip endpoints
        .route("/viagens", get(routes::trips::list_trips).post(routes::trips::create_trip))
        .route("/viagens/{id}", put(routes::trips::update_trip).delete(routes::trips::delete_trip))
        .route("/viagens/transporte/{transp}", get(routes::trips::trips_by_transport))
        .route("/viagens/preco/{maximo}", get(routes::trips::trips_up_to_price))
        .route("/viagens/destino/ordem", get(routes::trips::trips_by_destination))
        .route("/viagens/resumo/media", get(routes::trips::trip_averages))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
