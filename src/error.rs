use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::handlers::response::JsonUtf8;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
///
/// The database variant keeps the client-facing message of the legacy export
/// endpoint, raw driver message included, so existing consumers keep working.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Erro na consulta SQL: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!(error = %self, status = %status, "request failed");

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, JsonUtf8(body)).into_response()
    }
}
