//! Public configuration for the YouTube search client.

use std::time::Duration;

use ssrelay_core::ApiKey;

/// Default search endpoint of the YouTube Data API v3.
pub const DEFAULT_YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Configuration for the YouTube search client.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub(crate) api_key: ApiKey,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Option<Duration>,
}

impl YouTubeConfig {
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_YOUTUBE_SEARCH_URL.to_string(),
            user_agent: concat!("ssrelay-youtube/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }

    /// Override the search endpoint, e.g. to point at a local stub.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
