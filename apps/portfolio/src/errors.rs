use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

const NOT_FOUND_BODY: &str = "404 page not found";
const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Application-level error type.
/// Implements `IntoResponse` so page handlers can return `Result<T, AppError>`.
/// Clients only ever see a fixed plain-text body; details go to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound | AppError::Store(StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
            }
            AppError::Store(StoreError::Backend(e)) => {
                tracing::error!("Database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
            AppError::Render(e) => {
                tracing::error!("Template error: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}
