//! Display command relay.

use axum::Json;
use bytes::Bytes;
use serde_json::Value;
use ssrelay_core::{Command, RelayError};

use crate::error::HttpError;
use crate::state::AppState;

/// Relay one display command.
///
/// The body is decoded here rather than through `Json` so that malformed
/// input gets the same validation error body as a missing parameter.
pub async fn relay(
    state: AppState,
    command: Command,
    body: Bytes,
) -> Result<Json<Value>, HttpError> {
    let args = parse_body(&body)?;
    let outcome = state.relay.execute(command, args).await?;
    Ok(Json(outcome.into_body()))
}

fn parse_body(body: &[u8]) -> Result<Value, RelayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RelayError::Validation("request body is empty".to_string()));
    }
    serde_json::from_slice(body)
        .map_err(|e| RelayError::Validation(format!("request body is not valid JSON: {e}")))
}
