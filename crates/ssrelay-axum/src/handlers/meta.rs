//! Banner and routing fallback.

use axum::Json;
use axum::http::{Method, Uri};
use serde_json::{Value, json};

use crate::error::HttpError;

pub async fn banner() -> Json<Value> {
    Json(json!({
        "message": concat!("ssrelay ", env!("CARGO_PKG_VERSION"), " is running"),
    }))
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found(method: Method, uri: Uri) -> HttpError {
    HttpError::NotFound(format!("{method} {}", uri.path()))
}
