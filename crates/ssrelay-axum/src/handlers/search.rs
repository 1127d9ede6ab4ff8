//! Video search passthrough.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use ssrelay_core::VideoLink;

use crate::error::HttpError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: Option<String>,
}

/// Return the first YouTube result for `query` as a watch URL.
pub async fn search_youtube(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<VideoLink>, HttpError> {
    let query = params.query.unwrap_or_default();
    Ok(Json(state.relay.search_video(&query).await?))
}
