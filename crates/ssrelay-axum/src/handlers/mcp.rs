//! MCP endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::state::AppState;

/// Handle one JSON-RPC message.
///
/// Notifications are acknowledged with `202 Accepted` and no body.
pub async fn rpc(State(state): State<AppState>, body: Bytes) -> Response {
    match state.mcp.handle_raw(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Liveness check. Touches no upstream.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Server-initiated streams are not offered.
pub async fn stream_unsupported() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "HEAD, POST")],
    )
}
