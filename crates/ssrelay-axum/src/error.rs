//! Axum-specific error type and its JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ssrelay_core::{ErrorCategory, ErrorReport, RelayError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Failure from the relay core.
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// No route matches the request.
    #[error("No route for {0}")]
    NotFound(String),
}

impl HttpError {
    fn report(&self) -> ErrorReport {
        match self {
            Self::Relay(err) => ErrorReport::from(err),
            Self::NotFound(_) => ErrorReport {
                error: self.to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
                category: ErrorCategory::Routing,
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = self.report();
        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(body)).into_response()
    }
}
