//! YouTube search client.

use ssrelay_core::ApiKey;
use url::Url;

use crate::config::YouTubeConfig;
use crate::error::{YouTubeError, YouTubeResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::SearchResponse;
use crate::url::build_search_url;

/// Default YouTube client using the reqwest HTTP backend.
pub type DefaultYouTubeClient = YouTubeClient<ReqwestBackend>;

/// Client for the YouTube Data API search endpoint.
pub struct YouTubeClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
    pub(crate) api_key: ApiKey,
}

impl DefaultYouTubeClient {
    pub fn new(config: &YouTubeConfig) -> YouTubeResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            base_url,
            api_key: config.api_key.clone(),
        })
    }
}

impl<B: HttpBackend> YouTubeClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, api_key: ApiKey, backend: B) -> Self {
        Self {
            backend,
            base_url,
            api_key,
        }
    }

    /// Run one search and return the first item's video id.
    pub async fn search_first(&self, query: &str) -> YouTubeResult<Option<String>> {
        let url = build_search_url(&self.base_url, query, self.api_key.expose());
        let raw = self.backend.get(&url).await?;

        if !(200..300).contains(&raw.status) {
            return Err(YouTubeError::ApiRequestFailed {
                status: raw.status,
                body: raw.body,
            });
        }

        let response: SearchResponse =
            serde_json::from_str(&raw.body).map_err(|e| YouTubeError::InvalidResponse {
                message: e.to_string(),
            })?;

        Ok(response.first_video_id().map(str::to_string))
    }
}
