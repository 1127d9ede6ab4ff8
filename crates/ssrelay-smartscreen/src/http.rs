//! HTTP backend abstraction for the SmartScreen API.
//!
//! The production backend posts with reqwest; tests substitute a fake that
//! records requests and returns canned responses.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::SmartScreenConfig;
use crate::error::SmartScreenResult;

/// Raw HTTP response before the platform's acceptance rules are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for HTTP backends that can post a JSON command.
///
/// This is an implementation detail - external code should use the
/// `CommandForwarder` port.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Post `body` to `url` with the given `Authorization` header value.
    async fn post_json(
        &self,
        url: &Url,
        authorization: &str,
        body: &Value,
    ) -> SmartScreenResult<RawResponse>;
}

/// Production HTTP backend using reqwest.
///
/// One attempt per call; failures are returned as-is.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &SmartScreenConfig) -> SmartScreenResult<Self> {
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
    async fn post_json(
        &self,
        url: &Url,
        authorization: &str,
        body: &Value,
    ) -> SmartScreenResult<RawResponse> {
        let response = self
            .client
            .post(url.as_str())
            .header("Authorization", authorization)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
