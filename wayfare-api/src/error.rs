use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use wayfare_core::CoreError;

use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                tracing::debug!("Not found: {}", what);
                not_found_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                server_error_response()
            }
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(what) => AppError::NotFound(what),
            CoreError::Storage(msg) => AppError::Internal(msg),
        }
    }
}

pub fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, views::not_found_page()).into_response()
}

pub fn server_error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, views::server_error_page()).into_response()
}

/// Turns a handler panic into the generic error page.
pub fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!("Handler panicked: {}", detail);
    server_error_response()
}

/// Unreadable form or query input counts as an empty submission, so it
/// comes back as a re-rendered form rather than a bare rejection.
pub(crate) fn or_empty<T: Default, R: std::fmt::Display>(extracted: Result<T, R>) -> T {
    extracted.unwrap_or_else(|rejection| {
        tracing::debug!("Discarding unreadable input: {}", rejection);
        T::default()
    })
}

/// Router fallback for paths no handler claims.
pub async fn fallback() -> AppError {
    AppError::NotFound("no such route".to_string())
}
