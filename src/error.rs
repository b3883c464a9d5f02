use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;
use crate::validation::Issues;

/// Handler failure. Validation and write failures are client errors (400);
/// read failures are server errors (500).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed with {} issue(s)", .0.len())]
    Validation(Issues),

    #[error("Write failed: {0}")]
    Write(StoreError),

    #[error("Read failed: {0}")]
    Read(StoreError),
}

#[derive(Serialize)]
struct ErrorResponse<T: Serialize> {
    erro: T,
}

#[derive(Serialize)]
struct StoreErrorDetail {
    tipo: &'static str,
    mensagem: String,
}

impl From<Issues> for ApiError {
    fn from(issues: Issues) -> Self {
        ApiError::Validation(issues)
    }
}

impl ApiError {
    pub fn write(err: StoreError) -> Self {
        ApiError::Write(err)
    }

    pub fn read(err: StoreError) -> Self {
        ApiError::Read(err)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Write(_) => StatusCode::BAD_REQUEST,
            ApiError::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn detail(err: &StoreError) -> StoreErrorDetail {
    let mensagem = match err {
        // Raw driver errors stay in the logs
        StoreError::Database(_) => "Database error".to_string(),
        other => other.to_string(),
    };

    StoreErrorDetail {
        tipo: err.kind(),
        mensagem,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Validation(issues) => (status, Json(ErrorResponse { erro: issues })).into_response(),
            ApiError::Write(err) | ApiError::Read(err) => {
                if let StoreError::Database(db_err) = err {
                    tracing::error!("Database failure: {}", db_err);
                }
                (status, Json(ErrorResponse { erro: detail(err) })).into_response()
            }
        }
    }
}
