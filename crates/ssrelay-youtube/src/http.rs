//! HTTP backend abstraction for the YouTube API.

use async_trait::async_trait;
use url::Url;

use crate::config::YouTubeConfig;
use crate::error::YouTubeResult;

/// Raw HTTP response before status and JSON checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for HTTP backends that can issue a GET.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn get(&self, url: &Url) -> YouTubeResult<RawResponse>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &YouTubeConfig) -> YouTubeResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url) -> YouTubeResult<RawResponse> {
        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
