//! SmartScreen client posting authorized commands to the remote-control API.

use serde_json::Value;
use ssrelay_core::{AuthorizedCommand, PlatformReply};
use url::Url;

use crate::config::SmartScreenConfig;
use crate::error::{SmartScreenError, SmartScreenResult};
use crate::http::{HttpBackend, RawResponse, ReqwestBackend};

/// Default SmartScreen client using the reqwest HTTP backend.
pub type DefaultSmartScreenClient = SmartScreenClient<ReqwestBackend>;

/// Client for the SmartScreen remote-control API.
///
/// Generic over the HTTP backend so tests can run without a network. Use
/// [`DefaultSmartScreenClient`] in production.
pub struct SmartScreenClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) endpoint: Url,
}

impl DefaultSmartScreenClient {
    /// Create a client for the configured endpoint.
    ///
    /// Fails if the endpoint is not a valid absolute URL.
    pub fn new(config: &SmartScreenConfig) -> SmartScreenResult<Self> {
        let endpoint = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, endpoint })
    }
}

impl<B: HttpBackend> SmartScreenClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(endpoint: Url, backend: B) -> Self {
        Self { backend, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one command and apply the platform's acceptance rules.
    pub async fn send(&self, command: &AuthorizedCommand) -> SmartScreenResult<PlatformReply> {
        let raw = self
            .backend
            .post_json(&self.endpoint, &command.authorization(), &command.envelope())
            .await?;
        interpret(raw)
    }
}

/// Accepted means a 2xx status and `ErrCode == 0`.
fn interpret(raw: RawResponse) -> SmartScreenResult<PlatformReply> {
    if !(200..300).contains(&raw.status) {
        return Err(SmartScreenError::ApiRequestFailed {
            status: raw.status,
            body: raw.body,
        });
    }

    let body: Value =
        serde_json::from_str(&raw.body).map_err(|e| SmartScreenError::InvalidResponse {
            message: e.to_string(),
        })?;

    let code = body.get("ErrCode").and_then(Value::as_i64).unwrap_or(-1);
    if code != 0 {
        let message = body
            .get("ErrMsg")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        return Err(SmartScreenError::Rejected { code, message });
    }

    Ok(PlatformReply {
        status: raw.status,
        body,
    })
}
