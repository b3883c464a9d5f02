use axum::{http::StatusCode, response::Json};
use chrono_tz::America::Sao_Paulo;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    servico: &'static str,
    versao: &'static str,
    /// RFC 3339, Brazilian local time
    horario: String,
}

// GET /health
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok",
        servico: env!("CARGO_PKG_NAME"),
        versao: env!("CARGO_PKG_VERSION"),
        horario: chrono::Utc::now().with_timezone(&Sao_Paulo).to_rfc3339(),
    };

    (StatusCode::OK, Json(response))
}
