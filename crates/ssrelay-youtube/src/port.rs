//! `VideoSearchPort` implementation for `YouTubeClient`.

use async_trait::async_trait;
use ssrelay_core::{RelayError, RelayResult, VideoMatch, VideoSearchPort};
use tracing::debug;

use crate::client::YouTubeClient;
use crate::error::YouTubeError;
use crate::http::HttpBackend;

fn map_error(err: YouTubeError) -> RelayError {
    match err {
        YouTubeError::ApiRequestFailed { status, body } => {
            RelayError::UpstreamStatus { status, body }
        }
        YouTubeError::InvalidResponse { message } => RelayError::MalformedResponse(message),
        YouTubeError::Network(e) if e.is_timeout() => RelayError::Timeout(e.to_string()),
        YouTubeError::Network(e) => RelayError::Transport(e.to_string()),
        YouTubeError::InvalidUrl(e) => RelayError::Configuration(e.to_string()),
    }
}

#[async_trait]
impl<B: HttpBackend + 'static> VideoSearchPort for YouTubeClient<B> {
    async fn first_match(&self, query: &str) -> RelayResult<Option<VideoMatch>> {
        debug!(query = %query, "Searching YouTube");
        let hit = self.search_first(query).await.map_err(map_error)?;
        Ok(hit.map(|video_id| VideoMatch { video_id }))
    }
}
