//! Route definitions and router construction.
//!
//! Commands are a static table: each `Command` owns its path and the
//! handler receives the command as a value.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use bytes::Bytes;
use ssrelay_core::Command;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// One `POST` route per display command.
fn command_routes() -> Router<AppState> {
    Command::ALL
        .into_iter()
        .fold(Router::new(), |router, command| {
            router.route(
                command.path(),
                post(move |State(state): State<AppState>, body: Bytes| {
                    handlers::commands::relay(state, command, body)
                }),
            )
        })
}

/// Create the main Axum router with all routes.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    command_routes()
        .route("/search-youtube", get(handlers::search::search_youtube))
        .route(
            "/mcp",
            post(handlers::mcp::rpc)
                .head(handlers::mcp::liveness)
                .get(handlers::mcp::stream_unsupported),
        )
        .route("/test", get(handlers::meta::banner))
        .fallback(handlers::meta::not_found)
        .method_not_allowed_fallback(handlers::meta::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
}
